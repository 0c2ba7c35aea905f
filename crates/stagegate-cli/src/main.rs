use stagegate_core::{PhaseStore, WorkflowService};

fn main() {
    // (A) ストアを用意して service に注入
    let mut service = WorkflowService::new(PhaseStore::new());

    // (B) フェーズを作成（挿入順がそのままゲート順になる）
    let design = service
        .create_phase("Design", "Sketch the feature and agree on scope")
        .expect("fresh name");
    let build = service
        .create_phase("Build", "Implement and test the feature")
        .expect("fresh name");
    let design_id = design.phase_id.to_string();
    let build_id = build.phase_id.to_string();

    // (C) タスクを投入
    let design = service
        .create_task("wireframes", "Draw the main flows", &design_id)
        .expect("phase exists");
    let wireframes_id = design.tasks[0].task_id.to_string();
    let build = service
        .create_task("scaffolding", "Set up the project skeleton", &build_id)
        .expect("phase exists");
    let scaffolding_id = build.tasks[0].task_id.to_string();

    // (D) ゲートが閉じていることを確認（Design が終わるまで Build は進めない）
    match service.complete_task(&build_id, &scaffolding_id, true) {
        Err(error) => println!("blocked: {error}"),
        Ok(_) => println!("unexpected: the gate was open"),
    }

    // (E) Design を完了させるとゲートが開く
    let design = service
        .complete_task(&design_id, &wireframes_id, true)
        .expect("no previous phase");
    println!("{} done: {}", design.name, design.done);

    let build = service
        .complete_task(&build_id, &scaffolding_id, true)
        .expect("previous phase is done");
    println!("{} done: {}", build.name, build.done);

    // (F) undo で差し戻すと done も戻る
    let design = service
        .undo_task(&design_id, &wireframes_id)
        .expect("task was completed");
    println!("after undo, {} done: {}", design.name, design.done);

    // (G) 最終状態（挿入順の JSON とカウント）
    let phases: Vec<_> = service.phases().collect();
    println!("{}", serde_json::to_string_pretty(&phases).expect("records serialize"));
    println!("counts: {:?}", service.counts());
}

use serde::{Deserialize, Serialize};

/// Snapshot counts of the workflow, for observability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowCounts {
    pub phases: usize,
    pub phases_done: usize,
    pub tasks: usize,
    pub tasks_completed: usize,
}

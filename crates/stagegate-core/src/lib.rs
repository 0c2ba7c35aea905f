//! stagegate-core
//!
//! Core building blocks for tracking a sequential phased workflow: phases
//! are worked through in creation order, and a task may only be completed
//! once the phase before it is fully done.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, phase, task）
//! - **ports**: 抽象化レイヤー（IdGenerator）
//! - **store**: 挿入順を保持する in-memory ストア
//! - **service**: 業務ルール（バリデーション、ゲート、done の再計算）
//! - **status**: カウントビュー（観測用）
//! - **error**: エラー型

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod status;
pub mod store;

pub use domain::{PhaseId, PhaseRecord, TaskId, TaskRecord};
pub use error::WorkflowError;
pub use service::WorkflowService;
pub use status::WorkflowCounts;
pub use store::PhaseStore;

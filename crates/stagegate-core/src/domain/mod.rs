//! Domain model (ids and records).
//!
//! - **ids**: 型安全な ID（PhaseId, TaskId）
//! - **phase**: PhaseRecord（挿入順で並ぶ作業ステージ）
//! - **task**: TaskRecord（phase 内の作業単位）

pub mod ids;
pub mod phase;
pub mod task;

pub use ids::{Id, IdMarker, ParseIdError, PhaseId, TaskId};
pub use phase::PhaseRecord;
pub use task::TaskRecord;

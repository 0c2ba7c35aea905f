use thiserror::Error;

/// Business-rule errors surfaced by the workflow service.
///
/// All variants are synchronous and non-retryable: the caller must fix the
/// input or the workflow state and resubmit. Checks run before any state
/// write, so a failed call leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("{0} is a required field")]
    MissingField(&'static str),

    #[error("phase with name '{0}' already exists")]
    DuplicateName(String),

    #[error("phase not found")]
    PhaseNotFound,

    #[error("task not found")]
    TaskNotFound,

    #[error("cannot mark task as completed until all tasks in previous phase are completed")]
    PreviousPhaseIncomplete,

    #[error("task is not completed")]
    TaskNotCompleted,
}

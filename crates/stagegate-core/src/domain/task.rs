//! Task record: one unit of work inside a phase.

use serde::{Deserialize, Serialize};

use super::ids::TaskId;

/// A single task tracked inside a phase.
///
/// Tasks are never deleted; the only mutation after creation is the
/// `completed` flag flipping in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub task_id: TaskId,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

impl TaskRecord {
    pub fn new(task_id: TaskId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            task_id,
            name: name.into(),
            description: description.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_incomplete() {
        let task = TaskRecord::new(TaskId::from_bytes([0, 0, 0, 1]), "wireframes", "draw them");
        assert!(!task.completed);
        assert_eq!(task.name, "wireframes");
    }
}

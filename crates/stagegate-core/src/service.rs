//! Workflow service: business rules over the phase store.
//!
//! Design intent:
//! - The store holds records and does primitive mutation only.
//! - Business rules (input validation, the phase gate, `done` derivation)
//!   live here, composed from store primitives.
//! - Checks run before the first state write, so a failed call leaves the
//!   store untouched.

use crate::domain::{PhaseId, PhaseRecord, TaskId};
use crate::error::WorkflowError;
use crate::ports::{HexIdGenerator, IdGenerator};
use crate::status::WorkflowCounts;
use crate::store::PhaseStore;

/// Service enforcing the sequencing rules of a phased workflow.
///
/// Phase ids and task ids cross this boundary as strings; callers hold the
/// rendered form. A string that does not parse cannot resolve to a record,
/// so parse failures surface as not-found.
pub struct WorkflowService<G = HexIdGenerator> {
    store: PhaseStore<G>,
}

impl Default for WorkflowService<HexIdGenerator> {
    fn default() -> Self {
        Self::new(PhaseStore::new())
    }
}

impl<G: IdGenerator> WorkflowService<G> {
    /// Service over an injected store (no global state).
    pub fn new(store: PhaseStore<G>) -> Self {
        Self { store }
    }

    /// Create a phase at the end of the sequence.
    pub fn create_phase(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<PhaseRecord, WorkflowError> {
        if name.is_empty() {
            return Err(WorkflowError::MissingField("name"));
        }
        if description.is_empty() {
            return Err(WorkflowError::MissingField("description"));
        }
        if self.store.get_by_name(name).is_some() {
            return Err(WorkflowError::DuplicateName(name.to_string()));
        }

        Ok(self.store.create_phase(name, description).clone())
    }

    /// Create a task inside a phase. Returns the updated phase.
    pub fn create_task(
        &mut self,
        name: &str,
        description: &str,
        phase_id: &str,
    ) -> Result<PhaseRecord, WorkflowError> {
        if name.is_empty() {
            return Err(WorkflowError::MissingField("name"));
        }
        if description.is_empty() {
            return Err(WorkflowError::MissingField("description"));
        }
        if phase_id.is_empty() {
            return Err(WorkflowError::MissingField("phase_id"));
        }
        let phase_id = parse_phase_id(phase_id)?;

        self.store
            .append_task(phase_id, name, description)
            .cloned()
            .ok_or(WorkflowError::PhaseNotFound)
    }

    /// Set a task's completed flag, subject to the phase gate, then derive
    /// the phase's `done` flag. Returns the updated phase.
    ///
    /// The gate applies regardless of the requested flag value; `undo_task`
    /// is the ungated path for clearing a task.
    pub fn complete_task(
        &mut self,
        phase_id: &str,
        task_id: &str,
        completed: bool,
    ) -> Result<PhaseRecord, WorkflowError> {
        let phase_id = parse_phase_id(phase_id)?;
        let task_id = parse_task_id(task_id)?;

        let phase = self.store.get(phase_id).ok_or(WorkflowError::PhaseNotFound)?;
        let task_index = phase.task_index(task_id).ok_or(WorkflowError::TaskNotFound)?;

        if let Some(previous_id) = self.store.previous_phase_id(phase_id)
            && let Some(previous) = self.store.get(previous_id)
            && !previous.done
        {
            return Err(WorkflowError::PreviousPhaseIncomplete);
        }

        self.store.mark_task_completed(phase_id, task_index, completed);
        self.recompute_done(phase_id);

        Ok(self
            .store
            .get(phase_id)
            .expect("phase must exist after the lookup above")
            .clone())
    }

    /// Clear a completed task. Always permitted regardless of neighboring
    /// phase state. Returns the updated phase.
    pub fn undo_task(
        &mut self,
        phase_id: &str,
        task_id: &str,
    ) -> Result<PhaseRecord, WorkflowError> {
        if phase_id.is_empty() {
            return Err(WorkflowError::MissingField("phase_id"));
        }
        if task_id.is_empty() {
            return Err(WorkflowError::MissingField("task_id"));
        }
        let phase_id = parse_phase_id(phase_id)?;
        let task_id = parse_task_id(task_id)?;

        let phase = self.store.get(phase_id).ok_or(WorkflowError::PhaseNotFound)?;
        let task_index = phase.task_index(task_id).ok_or(WorkflowError::TaskNotFound)?;
        if !phase.tasks[task_index].completed {
            return Err(WorkflowError::TaskNotCompleted);
        }

        self.store.mark_task_completed(phase_id, task_index, false);
        self.recompute_done(phase_id);

        Ok(self
            .store
            .get(phase_id)
            .expect("phase must exist after the lookup above")
            .clone())
    }

    /// All phases in insertion order (read-only view).
    pub fn phases(&self) -> impl Iterator<Item = &PhaseRecord> {
        self.store.iter()
    }

    /// Snapshot counts for observability.
    pub fn counts(&self) -> WorkflowCounts {
        self.store.counts()
    }

    /// Derive `done` from the task flags. Whenever the recompute yields
    /// done, close the gate downstream by resetting the next phase's flag,
    /// even if this phase was already done before the call.
    fn recompute_done(&mut self, phase_id: PhaseId) {
        let Some(phase) = self.store.get(phase_id) else {
            return;
        };
        let done = phase.all_tasks_completed();
        self.store.set_done(phase_id, done);
        if done && let Some(next_id) = self.store.next_phase_id(phase_id) {
            self.store.set_done(next_id, false);
        }
    }
}

fn parse_phase_id(raw: &str) -> Result<PhaseId, WorkflowError> {
    raw.parse().map_err(|_| WorkflowError::PhaseNotFound)
}

fn parse_task_id(raw: &str) -> Result<TaskId, WorkflowError> {
    raw.parse().map_err(|_| WorkflowError::TaskNotFound)
}

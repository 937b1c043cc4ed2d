use super::tasks::{BackendKind, TaskStore};
use super::{Result, StoreError};
use crate::libs::task::{AddResult, MutateResult, Task, TaskDraft, TaskFilter, TaskId};
use parking_lot::RwLock;
use uuid::Uuid;

/// Tasks kept in insertion order for the lifetime of the process.
///
/// Identifiers are UUID v4 strings; anything else is rejected as malformed,
/// mirroring the format check the MongoDB backend applies to ObjectIds.
/// Lookups compare parsed values, so any spelling `Uuid` accepts (uppercase,
/// braced, `urn:uuid:`, simple) names the same task.
pub struct MemoryStore {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { tasks: RwLock::new(Vec::new()) }
    }

    /// Canonical hyphenated form of `id`, the form stored tasks carry.
    fn parse_id(id: &TaskId) -> Result<TaskId> {
        let uuid = Uuid::parse_str(id.as_str()).map_err(|_| StoreError::MalformedId {
            id: id.to_string(),
            expected: "a UUID",
        })?;

        Ok(TaskId::new(uuid.hyphenated().to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for MemoryStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    fn list(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let tasks = self.tasks.read();
        Ok(tasks.iter().filter(|task| filter.matches(task)).cloned().collect())
    }

    fn add(&self, draft: &TaskDraft) -> Result<AddResult> {
        let id = TaskId::new(Uuid::new_v4().hyphenated().to_string());
        self.tasks.write().push(Task::from_draft(id.clone(), draft));
        tracing::debug!(%id, "task stored in memory");

        Ok(AddResult { id })
    }

    fn update(&self, id: &TaskId, draft: &TaskDraft) -> Result<MutateResult> {
        let id = Self::parse_id(id)?;
        let mut tasks = self.tasks.write();
        match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.apply(draft);
                Ok(MutateResult::new(1))
            }
            None => Ok(MutateResult::new(0)),
        }
    }

    fn delete(&self, id: &TaskId) -> Result<MutateResult> {
        let id = Self::parse_id(id)?;
        let mut tasks = self.tasks.write();
        match tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                tasks.remove(index);
                Ok(MutateResult::new(1))
            }
            None => Ok(MutateResult::new(0)),
        }
    }

    fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>> {
        let id = Self::parse_id(id)?;
        Ok(self.tasks.read().iter().find(|task| task.id == id).cloned())
    }
}

//! Backend-independent task operations.
//!
//! [`Tasks`] is the only type the rest of the application uses to read and
//! write tasks. It owns one [`TaskStore`] chosen at construction and forwards
//! every call to it; the choice never changes afterwards.
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::task::{TaskFilter, TaskStatus};
//!
//! let tasks = Tasks::memory();
//! let added = tasks.add("Buy milk", "", TaskStatus::Pending)?;
//! tasks.update(&added.id, "Buy milk", "2 litres", TaskStatus::Done)?;
//! assert_eq!(tasks.list(TaskFilter::All)?.len(), 1);
//! # Ok::<(), taskdesk::db::StoreError>(())
//! ```

use super::memory::MemoryStore;
use super::mongo::MongoStore;
use super::probe;
use super::Result;
use crate::libs::config::DatabaseConfig;
use crate::libs::task::{AddResult, MutateResult, Task, TaskDraft, TaskFilter, TaskId, TaskStatus};
use std::fmt;

/// Which storage answers the calls of a [`Tasks`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Remote,
    Memory,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Remote => write!(f, "MongoDB"),
            BackendKind::Memory => write!(f, "in-memory"),
        }
    }
}

/// CRUD contract shared by every storage backend.
///
/// Implementations must report misses as `None` or a zero affected count,
/// never as errors, and must reject identifiers they could not have issued
/// with [`StoreError::MalformedId`](super::StoreError::MalformedId).
pub trait TaskStore: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Tasks matching `filter`, in the backend's natural order.
    fn list(&self, filter: TaskFilter) -> Result<Vec<Task>>;

    fn add(&self, draft: &TaskDraft) -> Result<AddResult>;

    /// Replaces title, description and status. Never inserts.
    fn update(&self, id: &TaskId, draft: &TaskDraft) -> Result<MutateResult>;

    fn delete(&self, id: &TaskId) -> Result<MutateResult>;

    fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>>;
}

pub struct Tasks {
    store: Box<dyn TaskStore>,
}

impl Tasks {
    /// Probes the configured database and binds to it, or to an empty
    /// in-memory store when the probe fails.
    pub fn connect(config: &DatabaseConfig) -> Self {
        Self::from_probe(probe::probe(config))
    }

    /// Picks the backend from a finished probe.
    pub fn from_probe(outcome: Result<MongoStore>) -> Self {
        match outcome {
            Ok(store) => Self::with_store(Box::new(store)),
            Err(_) => Self::memory(),
        }
    }

    pub fn memory() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    pub fn with_store(store: Box<dyn TaskStore>) -> Self {
        Self { store }
    }

    pub fn backend(&self) -> BackendKind {
        self.store.kind()
    }

    pub fn is_connected(&self) -> bool {
        self.backend() == BackendKind::Remote
    }

    pub fn list(&self, filter: impl Into<TaskFilter>) -> Result<Vec<Task>> {
        self.store.list(filter.into())
    }

    pub fn add(&self, title: &str, description: &str, status: TaskStatus) -> Result<AddResult> {
        self.store.add(&TaskDraft::new(title, description, status))
    }

    pub fn update(&self, id: &TaskId, title: &str, description: &str, status: TaskStatus) -> Result<MutateResult> {
        self.store.update(id, &TaskDraft::new(title, description, status))
    }

    pub fn delete(&self, id: &TaskId) -> Result<MutateResult> {
        self.store.delete(id)
    }

    pub fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>> {
        self.store.find_by_id(id)
    }
}

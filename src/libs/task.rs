//! Task entity and the value types shared by both storage backends.
//!
//! A [`Task`] is identified by an opaque [`TaskId`] whose format depends on the
//! backend that created it: a 24-character hex ObjectId for MongoDB, a UUID for
//! the in-memory store. Operation results ([`AddResult`], [`MutateResult`]) have
//! the same shape regardless of which backend served the call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Completion state of a task.
///
/// Serialized with the labels the original collection stores (`Pendente`,
/// `Concluída`) so existing documents remain readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Pendente", alias = "Pending")]
    Pending,
    #[serde(rename = "Concluída", alias = "Done")]
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 2] = [TaskStatus::Pending, TaskStatus::Done];

    /// Value written to the `status` field of a stored document.
    pub fn as_stored(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pendente",
            TaskStatus::Done => "Concluída",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "Pending"),
            TaskStatus::Done => write!(f, "Done"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task status '{0}' (expected Pending or Done)")]
pub struct ParseStatusError(pub String);

impl FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "pendente" => Ok(TaskStatus::Pending),
            "done" | "concluída" | "concluida" => Ok(TaskStatus::Done),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Which tasks a listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Status(TaskStatus),
}

impl TaskFilter {
    /// Builds a filter from free text.
    ///
    /// Anything that does not name a known status lists every task, the same
    /// as passing no filter at all.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => TaskFilter::All,
            Some(text) => match text.parse::<TaskStatus>() {
                Ok(status) => TaskFilter::Status(status),
                Err(err) => {
                    tracing::warn!(filter = text, "{}; listing all tasks", err);
                    TaskFilter::All
                }
            },
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Status(status) => task.status == *status,
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskFilter::All => write!(f, "All"),
            TaskFilter::Status(status) => write!(f, "{}", status),
        }
    }
}

impl From<Option<TaskStatus>> for TaskFilter {
    fn from(status: Option<TaskStatus>) -> Self {
        status.map_or(TaskFilter::All, TaskFilter::Status)
    }
}

impl From<TaskStatus> for TaskFilter {
    fn from(status: TaskStatus) -> Self {
        TaskFilter::Status(status)
    }
}

/// Opaque task identifier as handed out by a backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        TaskId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        TaskId(id)
    }
}

/// The mutable part of a task: everything except its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    pub fn new(title: &str, description: &str, status: TaskStatus) -> Self {
        TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn from_draft(id: TaskId, draft: &TaskDraft) -> Self {
        Task {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
        }
    }

    /// Overwrites the mutable fields, keeping the identifier.
    pub fn apply(&mut self, draft: &TaskDraft) {
        self.title = draft.title.clone();
        self.description = draft.description.clone();
        self.status = draft.status;
    }

    pub fn draft(&self) -> TaskDraft {
        TaskDraft::new(&self.title, &self.description, self.status)
    }
}

/// Outcome of an insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddResult {
    pub id: TaskId,
}

/// Outcome of an update or delete: how many tasks were touched (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutateResult {
    pub affected_count: u64,
}

impl MutateResult {
    pub fn new(affected_count: u64) -> Self {
        MutateResult { affected_count }
    }

    pub fn is_miss(&self) -> bool {
        self.affected_count == 0
    }
}

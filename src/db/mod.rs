//! Persistence layer for taskdesk.
//!
//! Tasks live either in a MongoDB collection or, when the server cannot be
//! reached at startup, in an in-process list. Both backends implement the
//! [`tasks::TaskStore`] trait and callers only ever talk to
//! [`tasks::Tasks`], which holds whichever backend the startup probe chose.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::config::Config;
//! use taskdesk::libs::task::{TaskFilter, TaskStatus};
//!
//! let config = Config::load()?;
//! let tasks = Tasks::connect(&config.database);
//! let added = tasks.add("Buy milk", "", TaskStatus::Pending)?;
//! let pending = tasks.list(TaskFilter::Status(TaskStatus::Pending))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use thiserror::Error;

/// In-process fallback backend.
pub mod memory;

/// MongoDB backend and the stored document shape.
pub mod mongo;

/// One-shot startup connectivity check.
pub mod probe;

/// Backend-independent task operations.
pub mod tasks;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the storage backends.
///
/// Missing tasks are not errors: lookups return `None` and mutations report
/// zero affected tasks.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The identifier is not in the format the active backend issues.
    #[error("malformed task id '{id}': expected {expected}")]
    MalformedId { id: String, expected: &'static str },

    /// A stored document could not be turned into a task.
    #[error("invalid task document: {0}")]
    InvalidDocument(String),

    /// The MongoDB driver reported a failure.
    #[error("database error: {0}")]
    Remote(#[from] mongodb::error::Error),
}

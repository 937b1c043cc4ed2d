//! # Taskdesk
//!
//! A task manager that keeps tasks in a MongoDB collection and falls back to
//! in-process storage when the database cannot be reached at startup.
//!
//! ## Features
//!
//! - **Task Management**: Add, edit, delete, list and filter tasks by status
//! - **Dual Backend**: MongoDB when reachable, memory otherwise, chosen once
//! - **Interactive Mode**: Menu-driven session with task selection
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

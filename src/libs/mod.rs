//! Core library modules for the taskdesk application.
//!
//! ## Features
//!
//! - **Task Model**: Task entity, status, filters and operation results
//! - **Controller**: Input validation and task selection for the front end
//! - **Configuration**: Database settings from file, `.env` and environment
//! - **User Interface**: Console messages and table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::controller::TaskController;
//! use taskdesk::libs::task::TaskStatus;
//!
//! let mut controller = TaskController::new(Tasks::memory());
//! controller.add_task("Write report", "Quarterly numbers", TaskStatus::Pending)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod controller;
pub mod data_storage;
pub mod messages;
pub mod task;
pub mod view;

//! Display implementation for taskdesk messages.
//!
//! All message text is defined here, in one match, so wording stays consistent
//! across the CLI and the interactive menu.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' added successfully", title),
            Message::TaskUpdated => "Task updated successfully".to_string(),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::TaskNotFound(id) => format!("Task with ID {} not found.", id),
            Message::TaskTitleEmpty => "The task title cannot be empty.".to_string(),
            Message::NoTaskSelected => "No task selected.".to_string(),
            Message::TaskSelected(title) => format!("Selected task: {}", title),
            Message::TasksNotFound => "No tasks found.".to_string(),
            Message::TasksHeader(filter) => format!("Tasks ({}):", filter),
            Message::ConfirmDeleteTask(title) => format!("Do you really want to delete '{}'?", title),
            Message::FilterIgnored(raw) => format!("Unknown status '{}', showing all tasks.", raw),

            // === DATABASE MESSAGES ===
            Message::DatabaseConnected { database, collection } => {
                format!("Connected to MongoDB ({}.{})", database, collection)
            }
            Message::DatabaseUnavailable(error) => {
                format!(
                    "MongoDB is unavailable ({}). Tasks will be kept in memory and lost when taskdesk exits.",
                    error
                )
            }
            Message::ChangesNotPersisted => {
                "This change was not saved to MongoDB and is gone now. Run taskdesk without a subcommand to work in memory for a whole session.".to_string()
            }
            Message::BackendInUse(backend) => format!("Storage backend: {}", backend),
            Message::MalformedTaskId(error) => format!("Invalid task ID: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigSummary {
                uri,
                database,
                collection,
                timeout_ms,
            } => format!("URI: {}\nDatabase: {}\nCollection: {}\nProbe timeout: {} ms", uri, database, collection, timeout_ms),

            // === PROMPTS ===
            Message::PromptDatabaseUri => "Enter the MongoDB connection URI".to_string(),
            Message::PromptDatabaseName => "Enter the database name".to_string(),
            Message::PromptCollectionName => "Enter the collection name".to_string(),
            Message::PromptTimeoutMs => "Enter the connection timeout (milliseconds)".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptFilter => "Show tasks with status".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),
            Message::PromptSelectAction => "What do you want to do?".to_string(),

            // === MENU ITEMS ===
            Message::MenuList => "List tasks".to_string(),
            Message::MenuFilter => "Filter by status".to_string(),
            Message::MenuAdd => "Add a task".to_string(),
            Message::MenuEdit => "Edit a task".to_string(),
            Message::MenuDelete => "Delete a task".to_string(),
            Message::MenuQuit => "Quit".to_string(),
            Message::FilterAll => "All".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}

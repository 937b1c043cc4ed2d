//! Glue between the front end and the task store.
//!
//! The controller validates user input before it reaches storage (a title is
//! required, edits and deletions need a selected task) and remembers which
//! task is currently selected. Storage itself accepts any input.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{AddResult, MutateResult, Task, TaskFilter, TaskId, TaskStatus};
use crate::msg_info;
use anyhow::Result;
use thiserror::Error;

/// Input rejected before reaching storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", Message::TaskTitleEmpty)]
    EmptyTitle,
    #[error("{}", Message::NoTaskSelected)]
    NoTaskSelected,
}

pub struct TaskController {
    tasks: Tasks,
    selected: Option<TaskId>,
}

impl TaskController {
    pub fn new(tasks: Tasks) -> Self {
        Self { tasks, selected: None }
    }

    pub fn tasks(&self) -> &Tasks {
        &self.tasks
    }

    pub fn selected(&self) -> Option<&TaskId> {
        self.selected.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn load_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        Ok(self.tasks.list(filter)?)
    }

    /// Turns a filter typed by the user into a [`TaskFilter`], telling the
    /// user when an unknown status falls back to listing everything.
    pub fn resolve_filter(&self, raw: Option<&str>) -> TaskFilter {
        let filter = TaskFilter::parse(raw);
        if let (Some(text), TaskFilter::All) = (raw, filter) {
            msg_info!(Message::FilterIgnored(text.to_string()));
        }
        filter
    }

    pub fn apply_filter(&self, raw: Option<&str>) -> Result<Vec<Task>> {
        self.load_tasks(self.resolve_filter(raw))
    }

    pub fn add_task(&mut self, title: &str, description: &str, status: TaskStatus) -> Result<AddResult> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        Ok(self.tasks.add(title, description, status)?)
    }

    pub fn update_task(&mut self, id: Option<&TaskId>, title: &str, description: &str, status: TaskStatus) -> Result<MutateResult> {
        let id = id.ok_or(ValidationError::NoTaskSelected)?;
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }

        let result = self.tasks.update(id, title, description, status)?;
        self.clear_selection();
        Ok(result)
    }

    /// Deletes after `confirm` agrees. Returns `None` when the user backs out.
    pub fn delete_task(&mut self, id: Option<&TaskId>, confirm: impl FnOnce(&TaskId) -> Result<bool>) -> Result<Option<MutateResult>> {
        let id = id.ok_or(ValidationError::NoTaskSelected)?;
        if !confirm(id)? {
            return Ok(None);
        }

        let result = self.tasks.delete(id)?;
        self.clear_selection();
        Ok(Some(result))
    }

    /// Looks a task up and makes it the current selection when it exists.
    pub fn select_task(&mut self, id: &TaskId) -> Result<Option<Task>> {
        let task = self.tasks.find_by_id(id)?;
        if task.is_some() {
            self.selected = Some(id.clone());
        }
        Ok(task)
    }
}

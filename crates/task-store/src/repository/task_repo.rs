//! Task Repository
//!
//! Serializes the whole task list as one JSON array under a single key.
//! There is no incremental write: every save replaces the stored value.

use super::traits::KeyValueStorage;
use crate::domain::{DomainResult, Task, TaskList};

/// Storage key used by the widget unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "taskListTasks";

pub struct TaskRepository<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> TaskRepository<S> {
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored list
    ///
    /// Absent key gives an empty list. Malformed JSON, a value of the wrong
    /// shape, or duplicate ids give `DomainError::Corrupt`.
    pub fn load(&self) -> DomainResult<TaskList> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            tracing::debug!(key = %self.key, "no stored tasks");
            return Ok(TaskList::new());
        };
        let tasks: Vec<Task> = serde_json::from_str(&raw)?;
        let list = TaskList::from_tasks(tasks)?;
        tracing::info!(key = %self.key, count = list.len(), "tasks loaded");
        Ok(list)
    }

    /// Replace the stored list with `list`
    pub fn save(&self, list: &TaskList) -> DomainResult<()> {
        let raw = serde_json::to_string(list.tasks())?;
        self.storage.set_item(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = list.len(), "tasks saved");
        Ok(())
    }
}

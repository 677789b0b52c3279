//! Task List
//!
//! Ordered, id-unique list of tasks with the id counter that feeds `add`.
//! All operations are synchronous; persisting is the caller's job.

use std::collections::HashSet;

use super::entity::{DomainError, DomainResult, Entity};
use super::task::Task;

/// Ordered task list
///
/// Invariants: ids are unique, and `next_id` is greater than every id in
/// `tasks`. Order is display order and persisted order. Once an id of
/// `u32::MAX` has been handed out the counter is exhausted (`None`) and
/// `add` refuses new tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: Option<u32>,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Build a list from previously stored tasks
    ///
    /// Rejects duplicate ids. The id counter resumes at `max(id) + 1`, and
    /// is exhausted when a stored id is already `u32::MAX`.
    pub fn from_tasks(tasks: Vec<Task>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id()) {
                return Err(DomainError::Corrupt(format!("duplicate task id {}", task.id)));
            }
        }
        let next_id = tasks
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Ok(Self { tasks, next_id })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id the next added task will receive; `None` once ids are exhausted
    pub fn next_id(&self) -> Option<u32> {
        self.next_id
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Index of the task in display order
    pub fn position(&self, id: u32) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.tasks.iter().map(|t| t.id).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Append a new task
    ///
    /// Returns `None` (and leaves the list untouched) for blank text or
    /// when no unused id is left.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        let text = Task::normalize_text(text)?;
        let Some(id) = self.next_id else {
            tracing::warn!("task ids exhausted, add refused");
            return None;
        };
        self.next_id = id.checked_add(1);
        self.tasks.push(Task::new(id, text));
        tracing::debug!(id, "task added");
        self.tasks.last()
    }

    /// Flip the completion flag; returns the new value
    pub fn toggle(&mut self, id: u32) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        tracing::debug!(id, completed = task.completed, "task toggled");
        Some(task.completed)
    }

    /// Remove the task with `id`, keeping the order of the rest
    pub fn delete(&mut self, id: u32) -> Option<Task> {
        let index = self.position(id)?;
        let removed = self.tasks.remove(index);
        tracing::debug!(id, "task deleted");
        Some(removed)
    }

    /// Replace the text of a task
    ///
    /// Blank text is ignored and the prior value kept. Returns whether the
    /// edit was applied.
    pub fn edit(&mut self, id: u32, text: &str) -> bool {
        let Some(text) = Task::normalize_text(text) else {
            return false;
        };
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = text.to_string();
                tracing::debug!(id, "task edited");
                true
            }
            None => false,
        }
    }

    /// Move the task at `from` so that it ends up at index `to`
    ///
    /// Both indices must address an existing task.
    pub fn reorder(&mut self, from: usize, to: usize) -> DomainResult<()> {
        let len = self.tasks.len();
        if from >= len || to >= len {
            return Err(DomainError::InvalidInput(format!(
                "reorder {} -> {} outside list of {} tasks",
                from, to, len
            )));
        }
        if from == to {
            return Ok(());
        }
        let moved = self.tasks.remove(from);
        self.tasks.insert(to, moved);
        tracing::debug!(from, to, "task reordered");
        Ok(())
    }

    /// Move the dragged task to the position currently held by the target
    pub fn move_task(&mut self, dragged_id: u32, target_id: u32) -> DomainResult<()> {
        let from = self
            .position(dragged_id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", dragged_id)))?;
        let to = self
            .position(target_id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", target_id)))?;
        self.reorder(from, to)
    }
}

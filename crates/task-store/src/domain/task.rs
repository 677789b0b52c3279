//! Task Entity
//!
//! One entry of the list: id, text, completion flag.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A single task record
///
/// Serialized as `{"id":1,"text":"...","completed":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned from the list's id counter
    pub id: u32,
    /// Task text content (trimmed, never empty)
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Normalise user input; `None` when nothing but whitespace remains
    pub fn normalize_text(text: &str) -> Option<&str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

impl Entity for Task {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(1, "Buy milk");
        assert_eq!(task.id(), 1);
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(Task::normalize_text("  Buy milk \n"), Some("Buy milk"));
        assert_eq!(Task::normalize_text(""), None);
        assert_eq!(Task::normalize_text(" \t\n "), None);
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task::new(3, "Write <b>report</b>");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":3,"text":"Write <b>report</b>","completed":false}"#);
    }
}

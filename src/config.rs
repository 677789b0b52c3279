//! Widget Configuration
//!
//! Storage key and user-facing labels. `Default` matches the stock widget.

use task_store::DEFAULT_STORAGE_KEY;

#[derive(Clone, Debug, PartialEq)]
pub struct TaskListConfig {
    /// Key of the JSON array in `localStorage`
    pub storage_key: String,
    pub placeholder: String,
    pub add_label: String,
    pub delete_label: String,
    /// How long a new row keeps the `added` class (fade-in animation)
    pub added_highlight_ms: u64,
}

impl Default for TaskListConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            placeholder: "New task".to_string(),
            add_label: "Add".to_string(),
            delete_label: "Delete".to_string(),
            added_highlight_ms: 500,
        }
    }
}

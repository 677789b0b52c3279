//! Widget State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: rows subscribe
//! to `tasks` through per-row memos, the editor to `editing`.

use leptos::prelude::*;
use reactive_stores::Store;
use task_store::{EditState, TaskList};

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered task list (mirrored to storage on every mutation)
    pub tasks: TaskList,
    /// Inline edit mode
    pub editing: EditState,
    /// Most recently added task, highlighted until the fade-in ends
    pub last_added: Option<u32>,
}

impl AppState {
    pub fn new(tasks: TaskList) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

//! Widget Context
//!
//! Owns the store, the repository and the config of one widget instance.
//! Every mutation goes store -> persist; rendering follows reactively.

use std::time::Duration;

use leptos::prelude::*;
use task_store::{resolve_drop, KeyValueStorage, TaskList, TaskRepository};

use crate::config::TaskListConfig;
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields, AppStore};

/// Widget-wide handles provided via context
///
/// Generic over the storage backend; the widget itself always runs on
/// `BrowserStorage`.
pub struct TaskListContext<S: KeyValueStorage + 'static = BrowserStorage> {
    pub store: AppStore,
    repo: StoredValue<TaskRepository<S>, LocalStorage>,
    config: StoredValue<TaskListConfig>,
    added_timer: StoredValue<Option<TimeoutHandle>>,
}

impl<S: KeyValueStorage + 'static> Clone for TaskListContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: KeyValueStorage + 'static> Copy for TaskListContext<S> {}

impl TaskListContext<BrowserStorage> {
    /// Open the browser's storage under the configured key
    pub fn load(config: TaskListConfig) -> Self {
        let repo = TaskRepository::with_key(BrowserStorage::detect(), config.storage_key.clone());
        Self::from_repository(repo, config)
    }
}

impl<S: KeyValueStorage + 'static> TaskListContext<S> {
    /// Load the persisted list and build the context around it
    ///
    /// Unreadable stored data is logged and replaced by an empty list; the
    /// stored value stays untouched until the first mutation.
    pub fn from_repository(repo: TaskRepository<S>, config: TaskListConfig) -> Self {
        let tasks = match repo.load() {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(key = %repo.key(), error = %err, "discarding stored tasks");
                TaskList::new()
            }
        };
        Self {
            store: AppStore::new(AppState::new(tasks)),
            repo: StoredValue::new_local(repo),
            config: StoredValue::new(config),
            added_timer: StoredValue::new(None),
        }
    }

    pub fn config<T>(&self, f: impl FnOnce(&TaskListConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Write the whole list to storage
    ///
    /// A failed write is logged; the in-memory list stays authoritative.
    fn persist(&self) {
        let tasks = self.store.tasks().read_untracked();
        self.repo.with_value(|repo| {
            if let Err(err) = repo.save(&tasks) {
                tracing::warn!(error = %err, "failed to persist tasks");
            }
        });
    }

    /// Add a task; returns false when the text was rejected
    pub fn add_task(&self, text: &str) -> bool {
        let added = self.store.tasks().write().add(text).map(|task| task.id);
        let Some(id) = added else {
            return false;
        };
        self.persist();
        self.flash_added(id);
        true
    }

    pub fn toggle_task(&self, id: u32) {
        let toggled = self.store.tasks().write().toggle(id);
        if toggled.is_some() {
            self.persist();
        }
    }

    pub fn delete_task(&self, id: u32) {
        let removed = self.store.tasks().write().delete(id);
        if removed.is_some() {
            self.store.editing().write().cancel(id);
            self.persist();
        }
    }

    /// Enter inline edit for `id`, replacing any edit in progress
    pub fn start_edit(&self, id: u32) {
        let text = self.store.tasks().read_untracked().get(id).map(|task| task.text.clone());
        if let Some(text) = text {
            self.store.editing().write().start(id, &text);
        }
    }

    pub fn set_draft(&self, id: u32, text: &str) {
        self.store.editing().write().set_draft(id, text);
    }

    /// Apply the draft (Enter or blur); blank drafts keep the old text
    pub fn save_edit(&self, id: u32) {
        let draft = self.store.editing().write().commit(id);
        let Some(draft) = draft else {
            return;
        };
        let applied = self.store.tasks().write().edit(id, &draft);
        if applied {
            self.persist();
        }
    }

    /// Leave edit mode without applying (Escape)
    pub fn cancel_edit(&self, id: u32) {
        self.store.editing().write().cancel(id);
    }

    /// Drop `dragged` onto `target`, taking the target's rendered index
    pub fn move_task(&self, dragged: u32, target: u32) {
        let rendered = self.store.tasks().read_untracked().ids();
        let Some((from, to)) = resolve_drop(&rendered, dragged, target) else {
            return;
        };
        let result = self.store.tasks().write().reorder(from, to);
        match result {
            Ok(()) => self.persist(),
            Err(err) => tracing::warn!(dragged, target, error = %err, "reorder rejected"),
        }
    }

    /// Mark `id` as freshly added until the fade-in animation ends
    fn flash_added(&self, id: u32) {
        self.clear_added_timer();
        *self.store.last_added().write() = Some(id);

        let store = self.store;
        let duration = Duration::from_millis(self.config(|c| c.added_highlight_ms));
        match set_timeout_with_handle(move || *store.last_added().write() = None, duration) {
            Ok(handle) => self.added_timer.set_value(Some(handle)),
            Err(_) => *self.store.last_added().write() = None,
        }
    }

    fn clear_added_timer(&self) {
        if let Some(handle) = self.added_timer.get_value() {
            handle.clear();
            self.added_timer.set_value(None);
        }
    }

    /// Cancel pending timers; called when the widget unmounts
    pub fn teardown(&self) {
        self.clear_added_timer();
    }
}

/// Get the widget context
pub fn use_task_list() -> TaskListContext {
    expect_context::<TaskListContext>()
}

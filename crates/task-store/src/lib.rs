//! Task Store
//!
//! State logic for the task list widget, independent of the browser.
//!
//! - `domain`: entities, the task list itself, edit-mode state machine
//! - `repository`: key-value storage abstraction and JSON persistence

pub mod domain;
pub mod repository;

pub use domain::{resolve_drop, DomainError, DomainResult, EditState, Entity, Task, TaskList};
pub use repository::{KeyValueStorage, MemoryStorage, TaskRepository, DEFAULT_STORAGE_KEY};

//! Repository Layer
//!
//! Whole-list persistence of the task list into a key-value store.

mod traits;
mod memory;
mod task_repo;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStorage;
pub use memory::MemoryStorage;
pub use task_repo::{TaskRepository, DEFAULT_STORAGE_KEY};

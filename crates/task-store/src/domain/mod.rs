//! Domain Layer
//!
//! Task entity, ordered task list and inline-edit state.

mod entity;
mod task;
mod task_list;
mod edit_state;
mod reorder;

pub use entity::{Entity, DomainError, DomainResult};
pub use task::Task;
pub use task_list::TaskList;
pub use edit_state::EditState;
pub use reorder::resolve_drop;

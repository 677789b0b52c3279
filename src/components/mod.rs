//! UI Components
//!
//! Leptos components of the task list widget.

mod task_list_widget;
mod new_task_form;
mod task_list_view;
mod task_row;

pub use task_list_widget::TaskListWidget;
pub use new_task_form::NewTaskForm;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;

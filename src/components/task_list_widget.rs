//! Task List Widget
//!
//! Top-level component: loads the persisted list, provides the context,
//! and lays out the add form above the list.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskListView};
use crate::config::TaskListConfig;
use crate::context::TaskListContext;

#[component]
pub fn TaskListWidget(
    /// Storage key and labels; defaults to `TaskListConfig::default()`
    #[prop(optional)]
    config: Option<TaskListConfig>,
) -> impl IntoView {
    let ctx: TaskListContext = TaskListContext::load(config.unwrap_or_default());
    provide_context(ctx);
    on_cleanup(move || ctx.teardown());

    view! {
        <div class="task-list">
            <NewTaskForm />
            <TaskListView />
        </div>
    }
}

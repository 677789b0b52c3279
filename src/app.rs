//! Task List Frontend App
//!
//! Page shell around a single task list widget.

use leptos::prelude::*;

use crate::components::TaskListWidget;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="main-content">
            <h1>"Tasks"</h1>
            <TaskListWidget />
        </main>
    }
}

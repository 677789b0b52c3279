//! Task List View Component
//!
//! Keyed list of rows with drag-and-drop reordering. Rows are keyed by
//! task id, so reorders move existing rows and toggles/edits only patch
//! the affected row.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_dragend, create_dnd_signals};

use crate::components::TaskRow;
use crate::context::use_task_list;
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_task_list();
    let store = ctx.store;

    let dnd = create_dnd_signals();
    // Drags released outside any row still need to clear the state
    bind_global_dragend(dnd);

    let task_ids = move || store.tasks().read().ids();
    let summary = move || {
        let tasks = store.tasks().read();
        format!("{} tasks, {} completed", tasks.len(), tasks.completed_count())
    };

    view! {
        <div class="tasks-container" id="tasks-container">
            <For
                each=task_ids
                key=|id| *id
                children=move |id| view! { <TaskRow id=id dnd=dnd /> }
            />
        </div>
        <p class="task-count">{summary}</p>
    }
}

//! New Task Form Component
//!
//! Text input plus Add button. Enter submits the form as well.

use leptos::prelude::*;

use crate::context::use_task_list;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_task_list();
    let (new_text, set_new_text) = signal(String::new());
    let placeholder = ctx.config(|c| c.placeholder.clone());
    let add_label = ctx.config(|c| c.add_label.clone());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Rejected (blank) text stays in the input
        if ctx.add_task(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="add-task" on:submit=create_task>
            <input
                type="text"
                id="new-task-input"
                placeholder=placeholder
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" id="add-btn">{add_label}</button>
        </form>
    }
}

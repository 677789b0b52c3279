//! Task Row Component
//!
//! One draggable row: checkbox, text (double-click to edit), delete.

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_task_list;
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskRow(id: u32, dnd: DndSignals) -> impl IntoView {
    let ctx = use_task_list();
    let store = ctx.store;
    let delete_label = ctx.config(|c| c.delete_label.clone());

    // Per-row memos: other rows changing doesn't re-render this one
    let task = Memo::new(move |_| store.tasks().read().get(id).cloned());
    let completed = Memo::new(move |_| task.get().is_some_and(|t| t.completed));
    let text = Memo::new(move |_| task.get().map(|t| t.text).unwrap_or_default());
    let is_editing = Memo::new(move |_| store.editing().read().is_editing(id));
    let draft = move || store.editing().read().draft().unwrap_or_default().to_string();

    let row_class = move || {
        let mut c = String::from("task-item");
        if completed.get() {
            c.push_str(" completed");
        }
        if store.last_added().get() == Some(id) {
            c.push_str(" added");
        }
        if dnd.is_dragging(id) {
            c.push_str(" dragging");
        }
        if dnd.is_over(id) {
            c.push_str(" drag-over");
        }
        if is_editing.get() {
            c.push_str(" editing");
        }
        c
    };

    // Focus the editor as soon as it mounts
    let edit_ref = NodeRef::<html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = edit_ref.get() {
            if let Err(err) = input.focus() {
                tracing::debug!(id, ?err, "could not focus editor");
            }
            input.select();
        }
    });

    let on_drop = make_on_drop(dnd, id, move |dragged, target| ctx.move_task(dragged, target));

    view! {
        <div
            class=row_class
            data-id=id.to_string()
            draggable=move || if is_editing.get() { "false" } else { "true" }
            on:dragstart=make_on_dragstart(dnd, id)
            on:dragover=make_on_dragover(dnd, id)
            on:dragleave=make_on_dragleave(dnd, id)
            on:drop=on_drop
            on:dragend=make_on_dragend(dnd)
        >
            <input
                type="checkbox"
                prop:checked=move || completed.get()
                on:change=move |_| ctx.toggle_task(id)
            />

            <Show
                when=move || is_editing.get()
                fallback=move || view! {
                    <span class="task-text" on:dblclick=move |_| ctx.start_edit(id)>
                        {move || text.get()}
                    </span>
                }
            >
                <input
                    type="text"
                    class="task-edit-input"
                    node_ref=edit_ref
                    prop:value=draft
                    on:input=move |ev| ctx.set_draft(id, &event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => {
                                ev.prevent_default();
                                ctx.save_edit(id);
                            }
                            "Escape" => ctx.cancel_edit(id),
                            _ => {}
                        }
                    }
                    on:blur=move |_| ctx.save_edit(id)
                />
            </Show>

            <button class="delete-btn" on:click=move |_| ctx.delete_task(id)>
                {delete_label}
            </button>
        </div>
    }
}

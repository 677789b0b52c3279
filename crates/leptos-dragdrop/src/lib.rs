//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for reorderable Leptos lists.
//! The dragged item's id travels in the `DataTransfer` as `text/plain`;
//! dropping onto an item reports `(dragged_id, target_id)` to the caller.

use leptos::prelude::*;

/// `DataTransfer` format carrying the dragged item id
pub const DRAG_DATA_FORMAT: &str = "text/plain";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Item currently being dragged
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Item currently hovered as a drop target
    pub over_id_read: ReadSignal<Option<u32>>,
    pub over_id_write: WriteSignal<Option<u32>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (over_id_read, over_id_write) = signal(None::<u32>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
    }
}

impl DndSignals {
    pub fn is_dragging(&self, item_id: u32) -> bool {
        self.dragging_id_read.get() == Some(item_id)
    }

    pub fn is_over(&self, item_id: u32) -> bool {
        self.over_id_read.get() == Some(item_id)
    }
}

/// Parse the id written by `make_on_dragstart`
pub fn parse_drag_id(data: &str) -> Option<u32> {
    data.trim().parse().ok()
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
}

/// Create dragstart handler for a draggable item
pub fn make_on_dragstart(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            if dt.set_data(DRAG_DATA_FORMAT, &item_id.to_string()).is_err() {
                tracing::warn!(item_id, "could not attach drag data");
            }
        }
        dnd.dragging_id_write.set(Some(item_id));
    }
}

/// Create dragover handler; accepting the drop requires preventing default
pub fn make_on_dragover(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        // Don't highlight self as a target
        let target = match dnd.dragging_id_read.get_untracked() {
            Some(dragging) if dragging == item_id => None,
            _ => Some(item_id),
        };
        if dnd.over_id_read.get_untracked() != target {
            dnd.over_id_write.set(target);
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        if dnd.over_id_read.get_untracked() == Some(item_id) {
            dnd.over_id_write.set(None);
        }
    }
}

/// Create drop handler for an item
///
/// Calls `on_drop(dragged_id, target_id)` unless the item was dropped on
/// itself or the drag carried no readable id.
pub fn make_on_drop<F>(dnd: DndSignals, target_id: u32, on_drop: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(u32, u32) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let from_data = ev
            .data_transfer()
            .and_then(|dt| dt.get_data(DRAG_DATA_FORMAT).ok())
            .and_then(|data| parse_drag_id(&data));
        // Fall back to our own state when the browser hides the data
        let dragged = from_data.or_else(|| dnd.dragging_id_read.get_untracked());
        end_drag(&dnd);

        match dragged {
            Some(dragged_id) if dragged_id != target_id => on_drop(dragged_id, target_id),
            Some(_) => tracing::debug!(target_id, "dropped on itself"),
            None => tracing::debug!(target_id, "drop without drag id"),
        }
    }
}

/// Create dragend handler for a draggable item
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| end_drag(&dnd)
}

/// Bind a window-level dragend handler so drags released outside any item
/// still clear the DnD state. The listener is removed when the owning
/// reactive scope is cleaned up.
pub fn bind_global_dragend(dnd: DndSignals) {
    let handle = window_event_listener(leptos::ev::dragend, move |_ev: web_sys::DragEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            end_drag(&dnd);
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drag_id() {
        assert_eq!(parse_drag_id("42"), Some(42));
        assert_eq!(parse_drag_id(" 7\n"), Some(7));
        assert_eq!(parse_drag_id(""), None);
        assert_eq!(parse_drag_id("task-1"), None);
        assert_eq!(parse_drag_id("-3"), None);
    }
}

//! Drop Resolution
//!
//! Maps a drag-and-drop gesture onto `TaskList::reorder` indices.

/// Resolve a drop of `dragged` onto `target` against the rendered order
///
/// Returns `(from, to)` indices, or `None` when nothing should move:
/// dropping onto itself, or either id not currently rendered.
pub fn resolve_drop(rendered: &[u32], dragged: u32, target: u32) -> Option<(usize, usize)> {
    if dragged == target {
        return None;
    }
    let from = rendered.iter().position(|id| *id == dragged)?;
    let to = rendered.iter().position(|id| *id == target)?;
    Some((from, to))
}

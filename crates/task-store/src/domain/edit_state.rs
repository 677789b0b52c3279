//! Inline Edit State
//!
//! `Idle -> Editing(id) -> Idle`. At most one task is editable at a time;
//! starting an edit on another task replaces the current one.

/// Which task (if any) is in inline-edit mode, with its uncommitted text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing { id: u32, draft: String },
}

impl EditState {
    pub fn editing_id(&self) -> Option<u32> {
        match self {
            EditState::Idle => None,
            EditState::Editing { id, .. } => Some(*id),
        }
    }

    pub fn is_editing(&self, task_id: u32) -> bool {
        self.editing_id() == Some(task_id)
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditState::Idle => None,
            EditState::Editing { draft, .. } => Some(draft),
        }
    }

    /// Enter edit mode for `id`; any edit in progress is dropped
    pub fn start(&mut self, id: u32, current_text: &str) {
        if let Some(prev) = self.editing_id().filter(|prev| *prev != id) {
            tracing::debug!(prev, id, "edit replaced");
        }
        *self = EditState::Editing {
            id,
            draft: current_text.to_string(),
        };
    }

    /// Update the draft of the task being edited
    pub fn set_draft(&mut self, id: u32, text: &str) {
        if let EditState::Editing { id: current, draft } = self {
            if *current == id {
                *draft = text.to_string();
            }
        }
    }

    /// Leave edit mode for `id`, handing back the draft to apply
    ///
    /// `None` when `id` is not the task being edited (e.g. a late blur after
    /// Escape already closed the editor).
    pub fn commit(&mut self, id: u32) -> Option<String> {
        if !self.is_editing(id) {
            return None;
        }
        match std::mem::take(self) {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Leave edit mode for `id` without applying anything
    pub fn cancel(&mut self, id: u32) -> bool {
        if self.is_editing(id) {
            *self = EditState::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_commit() {
        let mut state = EditState::default();
        assert_eq!(state.editing_id(), None);

        state.start(3, "old");
        assert!(state.is_editing(3));
        assert_eq!(state.draft(), Some("old"));

        state.set_draft(3, "new");
        assert_eq!(state.commit(3), Some("new".to_string()));
        assert_eq!(state, EditState::Idle);
    }

    #[test]
    fn test_start_on_other_task_replaces_edit() {
        let mut state = EditState::default();
        state.start(1, "one");
        state.set_draft(1, "one changed");
        state.start(2, "two");

        assert_eq!(state.editing_id(), Some(2));
        assert_eq!(state.draft(), Some("two"));
        assert_eq!(state.commit(1), None);
        assert!(state.is_editing(2));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut state = EditState::default();
        state.start(5, "text");
        state.set_draft(5, "typed");
        assert!(state.cancel(5));
        assert_eq!(state, EditState::Idle);
        // blur arriving after Escape
        assert_eq!(state.commit(5), None);
    }

    #[test]
    fn test_draft_for_other_task_is_ignored() {
        let mut state = EditState::default();
        state.start(1, "one");
        state.set_draft(2, "stray");
        assert_eq!(state.draft(), Some("one"));
        assert!(!state.cancel(2));
        assert!(state.is_editing(1));
    }
}

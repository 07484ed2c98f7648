use uuid::Uuid;

/// Which task, if any, the user is looking at or editing.
///
/// Editing always implies a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(Uuid),
    Editing(Uuid),
}

impl Selection {
    pub fn task_id(&self) -> Option<Uuid> {
        match self {
            Self::Idle => None,
            Self::Selected(id) | Self::Editing(id) => Some(*id),
        }
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.task_id() == Some(id)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn select(&mut self, id: Uuid) {
        *self = Self::Selected(id);
    }

    /// Open the editor on the current selection. No-op when idle.
    pub fn open_editor(&mut self) {
        if let Self::Selected(id) = *self {
            *self = Self::Editing(id);
        }
    }

    pub fn open_editor_for(&mut self, id: Uuid) {
        *self = Self::Editing(id);
    }

    /// Dismiss or save the editor; the task stays selected.
    pub fn close(&mut self) {
        if let Self::Editing(id) = *self {
            *self = Self::Selected(id);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_edit_close_cycle() {
        let id = Uuid::new_v4();
        let mut sel = Selection::default();
        assert_eq!(sel, Selection::Idle);

        sel.select(id);
        assert_eq!(sel, Selection::Selected(id));
        assert!(!sel.is_editing());

        sel.open_editor();
        assert_eq!(sel, Selection::Editing(id));
        assert!(sel.is_editing());

        sel.close();
        assert_eq!(sel, Selection::Selected(id));

        sel.clear();
        assert_eq!(sel.task_id(), None);
    }

    #[test]
    fn cannot_edit_without_selection() {
        let mut sel = Selection::Idle;
        sel.open_editor();
        assert_eq!(sel, Selection::Idle);
        sel.close();
        assert_eq!(sel, Selection::Idle);
    }

    #[test]
    fn selecting_another_task_while_editing_leaves_editor() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut sel = Selection::Editing(a);
        sel.select(b);
        assert_eq!(sel, Selection::Selected(b));
    }
}

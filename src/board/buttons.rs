use crate::{command_history::CommandHistory, traits::command::Command};

/// What the undo and redo buttons of a panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoButtons {
    pub undo_enabled: bool,
    pub undo_title: String,
    pub redo_enabled: bool,
    pub redo_title: String,
}

impl UndoButtons {
    #[must_use]
    pub fn for_history<C: Command>(history: &CommandHistory<C>) -> Self {
        Self {
            undo_enabled: history.can_undo(),
            undo_title: history.undo_menu_title(),
            redo_enabled: history.can_redo(),
            redo_title: history.redo_menu_title(),
        }
    }
}

use std::num::NonZeroUsize;

use super::command::Command;
use crate::error::HistoryResult;

/// The undo/redo surface a controller drives.
pub trait History<C: Command> {
    /// Applies `command` and records it.
    fn perform(&mut self, command: C, ctx: &mut C::Context);
    /// Reverts the most recent entry. Returns its label, or `None` when there
    /// was nothing to undo.
    fn undo(&mut self, ctx: &mut C::Context) -> HistoryResult<Option<String>>;
    /// Re-applies the most recently undone entry.
    fn redo(&mut self, ctx: &mut C::Context) -> HistoryResult<Option<String>>;
    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;
    fn set_history_limit(&mut self, limit: NonZeroUsize);

    fn batch_perform(&mut self, commands: Vec<C>, ctx: &mut C::Context) {
        for command in commands {
            self.perform(command, ctx);
        }
    }
}

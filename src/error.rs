//! Error types for history and board operations.
//!
//! Undoing or redoing with an empty stack is not an error; those calls
//! return `Ok(None)`. The errors here all mean the caller broke the
//! grouping protocol or addressed something that does not exist.

use thiserror::Error;

use crate::board::FigureId;

/// Errors reported by [`CommandHistory`](crate::command_history::CommandHistory).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// `begin_group` was called while another group was still open.
    #[error("Group \"{open}\" is already open")]
    GroupAlreadyOpen { open: String },

    /// `end_group` was called with no group open.
    #[error("No group is open")]
    NoOpenGroup,

    /// `undo`/`redo` was called while a group was still being recorded.
    #[error("Group \"{open}\" is still open")]
    GroupOpen { open: String },
}

/// Errors reported by [`Board`](crate::board::Board).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No figure with this id is on the board.
    #[error("Unknown figure: {0}")]
    UnknownFigure(FigureId),

    /// The settings session has previewed changes that were not saved yet.
    #[error("Figure {0} has unsaved style changes")]
    UnsavedChanges(FigureId),

    #[error("History error: {0}")]
    History(#[from] HistoryError),
}

/// Result type alias for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Result type alias for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

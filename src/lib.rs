#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::correctness)]
#![warn(clippy::complexity)]
#![warn(clippy::suspicious)]
#![warn(clippy::cargo)]

//! Command-based undo/redo.
//!
//! [`CommandHistory`](command_history::CommandHistory) keeps an undo stack and
//! a redo stack of reversible [`Command`](traits::command::Command)s, can
//! record several commands as one atomic [`Group`](group::Group), and tells
//! subscribers whenever its stacks change. The [`board`] module shows it
//! driving a small shape editor with one history per board and one per figure.

pub mod board;
pub mod command_history;
pub mod config;
pub mod error;
pub mod fn_command;
pub mod group;
pub mod observer;
pub mod shared_state;
pub mod traits;

pub mod prelude {
    pub use crate::command_history::CommandHistory;
    pub use crate::config::HistoryConfig;
    pub use crate::error::{HistoryError, HistoryResult};
    pub use crate::fn_command::FnCommand;
    pub use crate::group::{Entry, Group};
    pub use crate::observer::{StackChange, StackChanged, SubscriptionId};
    pub use crate::shared_state::SharedState;
    pub use crate::traits::command::Command;
    pub use crate::traits::history::History;
}

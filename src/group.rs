//! Atomic groups of commands and the entries the history stacks hold.

use std::borrow::Cow;

use crate::traits::command::Command;

/// A non-empty run of commands that is undone and redone as one step.
///
/// Undo walks the members back to front, execute and redo walk them front to
/// back, so each member always sees the state its neighbours left behind.
#[derive(Debug)]
pub struct Group<C> {
    name: String,
    commands: Vec<C>,
}

impl<C> Group<C> {
    /// Returns `None` when `commands` is empty.
    #[must_use]
    pub fn new(name: impl Into<String>, commands: Vec<C>) -> Option<Self> {
        if commands.is_empty() {
            return None;
        }

        Some(Self {
            name: name.into(),
            commands,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn commands(&self) -> &[C] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the group holds no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<C: Command> Command for Group<C> {
    type Context = C::Context;

    fn execute(&self, ctx: &mut Self::Context) {
        for command in &self.commands {
            command.execute(ctx);
        }
    }

    fn undo(&self, ctx: &mut Self::Context) {
        for command in self.commands.iter().rev() {
            command.undo(ctx);
        }
    }

    fn redo(&self, ctx: &mut Self::Context) {
        for command in &self.commands {
            command.redo(ctx);
        }
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// One slot on an undo or redo stack.
#[derive(Debug)]
pub enum Entry<C> {
    Single(C),
    Group(Group<C>),
}

impl<C> Entry<C> {
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Number of commands this entry reverts at once.
    #[must_use]
    pub fn command_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Group(group) => group.len(),
        }
    }
}

impl<C: Command> Command for Entry<C> {
    type Context = C::Context;

    fn execute(&self, ctx: &mut Self::Context) {
        match self {
            Self::Single(command) => command.execute(ctx),
            Self::Group(group) => group.execute(ctx),
        }
    }

    fn undo(&self, ctx: &mut Self::Context) {
        match self {
            Self::Single(command) => command.undo(ctx),
            Self::Group(group) => group.undo(ctx),
        }
    }

    fn redo(&self, ctx: &mut Self::Context) {
        match self {
            Self::Single(command) => command.redo(ctx),
            Self::Group(group) => group.redo(ctx),
        }
    }

    fn description(&self) -> Cow<'_, str> {
        match self {
            Self::Single(command) => command.description(),
            Self::Group(group) => group.description(),
        }
    }
}

use std::{borrow::Cow, fmt};

use crate::traits::command::Command;

type Action<Ctx> = Box<dyn Fn(&mut Ctx)>;

/// A command built from a label and two closures.
///
/// Handy when the mutation is a one-off and a dedicated type would be noise.
/// Closures that reach their state through a
/// [`SharedState`](crate::shared_state::SharedState) handle use `Ctx = ()`.
///
/// # Example
///
/// ```
/// use undo_history::prelude::*;
///
/// let position = SharedState::new((0.0, 0.0));
/// let mut history = CommandHistory::new();
///
/// let (before, after) = (position.get(), (10.0, 10.0));
/// let (fwd, back) = (position.clone(), position.clone());
/// history.perform(
///     FnCommand::new(
///         "Move to (10,10)",
///         move |_: &mut ()| fwd.set(after),
///         move |_: &mut ()| back.set(before),
///     ),
///     &mut (),
/// );
///
/// assert_eq!(position.get(), (10.0, 10.0));
/// assert_eq!(history.undo(&mut ()).unwrap().as_deref(), Some("Move to (10,10)"));
/// assert_eq!(position.get(), (0.0, 0.0));
/// ```
pub struct FnCommand<Ctx> {
    name: String,
    apply: Action<Ctx>,
    revert: Action<Ctx>,
}

impl<Ctx> FnCommand<Ctx> {
    pub fn new<A, U>(name: impl Into<String>, apply: A, undo: U) -> Self
    where
        A: Fn(&mut Ctx) + 'static,
        U: Fn(&mut Ctx) + 'static,
    {
        Self {
            name: name.into(),
            apply: Box::new(apply),
            revert: Box::new(undo),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<Ctx> Command for FnCommand<Ctx> {
    type Context = Ctx;

    fn execute(&self, ctx: &mut Ctx) {
        (self.apply)(ctx);
    }

    fn undo(&self, ctx: &mut Ctx) {
        (self.revert)(ctx);
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

impl<Ctx> fmt::Debug for FnCommand<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand").field("name", &self.name).finish_non_exhaustive()
    }
}

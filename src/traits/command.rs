use std::borrow::Cow;

/// A reversible mutation of some piece of application state.
///
/// A command carries everything it needs to go both ways, e.g. the previous
/// and the new center of a figure. It never changes after construction, so
/// every method takes `&self`.
///
/// # Associated Types
///
/// * `Context`: The state the command mutates. Commands that close over a
///   [`SharedState`](crate::shared_state::SharedState) handle use `()`.
///
/// # Required Methods
///
/// * `execute(&self, ctx: &mut Self::Context)`: Applies the forward mutation.
/// * `undo(&self, ctx: &mut Self::Context)`: Applies the inverse mutation.
///
/// # Provided Methods
///
/// * `redo(&self, ctx: &mut Self::Context)`: Calls `execute`.
/// * `description(&self) -> Cow<str>`: Label shown in "Undo …" captions.
///
/// # Example
///
/// ```
/// use undo_history::prelude::Command;
/// use std::borrow::Cow;
///
/// struct Nudge(i32);
///
/// impl Command for Nudge {
///     type Context = i32;
///
///     fn execute(&self, ctx: &mut Self::Context) {
///         *ctx += self.0;
///     }
///
///     fn undo(&self, ctx: &mut Self::Context) {
///         *ctx -= self.0;
///     }
///
///     fn description(&self) -> Cow<'_, str> {
///         Cow::Owned(format!("Nudge by {}", self.0))
///     }
/// }
///
/// let mut x = 10;
/// let cmd = Nudge(5);
/// cmd.execute(&mut x);
/// assert_eq!(x, 15);
/// cmd.undo(&mut x);
/// assert_eq!(x, 10);
/// assert_eq!(cmd.description(), "Nudge by 5");
/// ```
pub trait Command {
    type Context;

    /// Applies the forward mutation.
    fn execute(&self, ctx: &mut Self::Context);

    /// Restores the state that was current before `execute`.
    fn undo(&self, ctx: &mut Self::Context);

    /// Re-applies the command after an undo. Override when re-applying differs
    /// from the first execution.
    fn redo(&self, ctx: &mut Self::Context) {
        self.execute(ctx);
    }

    /// Human-readable label. The default implementation returns "Unknown command".
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Unknown command")
    }
}

use std::{fmt, sync::Arc};

use parking_lot::Mutex;

/// A clonable handle onto one piece of application state.
///
/// Closure commands capture clones of the handle instead of borrowing the
/// state, which lets the state outlive the call that recorded the command.
/// The board hands one out for its undo/redo buttons so a view can read them
/// without holding on to the board. Every clone points at the same value.
///
/// # Examples
///
/// ```
/// use undo_history::shared_state::SharedState;
///
/// let radius = SharedState::new(4.0_f32);
/// let handle = radius.clone();
///
/// let previous = handle.replace(12.0);
/// assert_eq!(previous, 4.0);
/// assert_eq!(radius.get(), 12.0);
///
/// let halved = radius.update(|r| {
///     *r /= 2.0;
///     *r
/// });
/// assert_eq!(halved, 6.0);
/// assert_eq!(handle.get(), 6.0);
/// ```
pub struct SharedState<T>(Arc<Mutex<T>>);

impl<T> SharedState<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }

    pub fn set(&self, value: T) {
        *self.0.lock() = value;
    }

    /// Stores `value` and returns what was there before.
    pub fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.0.lock(), value)
    }

    /// Runs `f` on the value and returns its result.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.0.lock())
    }

    /// Whether both handles point at the same value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> SharedState<T> {
    #[must_use]
    pub fn get(&self) -> T {
        self.0.lock().clone()
    }
}

impl<T> Clone for SharedState<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("SharedState");
        match self.0.try_lock() {
            Some(value) => tuple.field(&*value),
            None => tuple.field(&format_args!("<in use>")),
        };
        tuple.finish()
    }
}

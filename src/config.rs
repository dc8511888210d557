use std::num::NonZeroUsize;

/// Settings for a [`CommandHistory`](crate::command_history::CommandHistory).
///
/// The defaults match a platform undo manager: unlimited depth, the redo
/// stack is cleared whenever something new is performed, and the empty-stack
/// captions are "Undo" and "Redo".
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use undo_history::config::HistoryConfig;
///
/// let config = HistoryConfig::default()
///     .with_history_limit(NonZeroUsize::new(50).unwrap())
///     .with_placeholders("Annuler", "Rétablir");
///
/// assert_eq!(config.history_limit.map(NonZeroUsize::get), Some(50));
/// assert!(config.clear_redo_on_perform);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of entries kept per stack. `None` keeps everything.
    pub history_limit: Option<NonZeroUsize>,
    /// Whether recording a new entry discards the redo stack.
    pub clear_redo_on_perform: bool,
    /// Label reported by `undo_action_label` when there is nothing to undo.
    pub undo_placeholder: String,
    /// Label reported by `redo_action_label` when there is nothing to redo.
    pub redo_placeholder: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            clear_redo_on_perform: true,
            undo_placeholder: "Undo".to_string(),
            redo_placeholder: "Redo".to_string(),
        }
    }
}

impl HistoryConfig {
    #[must_use]
    pub fn with_history_limit(mut self, limit: NonZeroUsize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn unlimited(mut self) -> Self {
        self.history_limit = None;
        self
    }

    #[must_use]
    pub fn with_clear_redo_on_perform(mut self, clear: bool) -> Self {
        self.clear_redo_on_perform = clear;
        self
    }

    #[must_use]
    pub fn with_placeholders(mut self, undo: impl Into<String>, redo: impl Into<String>) -> Self {
        self.undo_placeholder = undo.into();
        self.redo_placeholder = redo.into();
        self
    }

    pub(crate) fn limit(&self) -> usize {
        self.history_limit.map_or(usize::MAX, NonZeroUsize::get)
    }
}

use std::{borrow::Cow, collections::VecDeque, fmt, num::NonZeroUsize};

use log::{debug, trace, warn};

use crate::{
    config::HistoryConfig,
    error::{HistoryError, HistoryResult},
    group::{Entry, Group},
    observer::{Observers, StackChange, StackChanged, SubscriptionId},
    traits::{command::Command, history::History},
};

/// Commands accumulated between `begin_group` and `end_group`.
struct OpenGroup<C> {
    name: String,
    commands: Vec<C>,
}

/// Linear undo/redo history.
///
/// The front of each deque is the top of the stack. Entries only move between
/// the two stacks through `undo` and `redo`; `perform` and `end_group` push
/// new entries onto the undo stack and, unless configured otherwise, drop the
/// redo stack.
pub struct CommandHistory<C: Command> {
    undo: VecDeque<Entry<C>>,
    redo: VecDeque<Entry<C>>,
    open_group: Option<OpenGroup<C>>,
    config: HistoryConfig,
    observers: Observers,
}

impl<C: Command> CommandHistory<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    #[must_use]
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            open_group: None,
            config,
            observers: Observers::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Applies `command`, then records it.
    ///
    /// Inside an open group the command joins the group and nothing is
    /// pushed until [`end_group`](Self::end_group).
    pub fn perform(&mut self, command: C, ctx: &mut C::Context) {
        command.execute(ctx);

        if let Some(group) = &mut self.open_group {
            trace!(
                "Appending \"{}\" to group \"{}\"",
                command.description(),
                group.name
            );
            group.commands.push(command);
            return;
        }

        self.record(Entry::Single(command), StackChange::Performed);
    }

    /// Opens a group; everything performed until `end_group` becomes one entry.
    ///
    /// # Errors
    ///
    /// [`HistoryError::GroupAlreadyOpen`] if a group is open. Groups do not nest.
    pub fn begin_group(&mut self, name: impl Into<String>) -> HistoryResult<()> {
        let name = name.into();
        if let Some(open) = &self.open_group {
            warn!("Cannot open group \"{name}\": \"{}\" is still open", open.name);
            return Err(HistoryError::GroupAlreadyOpen {
                open: open.name.clone(),
            });
        }

        trace!("Opened group \"{name}\"");
        self.open_group = Some(OpenGroup {
            name,
            commands: Vec::new(),
        });
        Ok(())
    }

    /// Closes the open group. Returns `true` if it was recorded, `false` if it
    /// was empty and discarded without touching either stack.
    ///
    /// # Errors
    ///
    /// [`HistoryError::NoOpenGroup`] if no group is open.
    pub fn end_group(&mut self) -> HistoryResult<bool> {
        let Some(open) = self.open_group.take() else {
            warn!("end_group called with no open group");
            return Err(HistoryError::NoOpenGroup);
        };

        match Group::new(open.name, open.commands) {
            Some(group) => {
                self.record(Entry::Group(group), StackChange::GroupCommitted);
                Ok(true)
            }
            None => {
                trace!("Discarded empty group");
                Ok(false)
            }
        }
    }

    /// Reverts the top entry and moves it to the redo stack.
    ///
    /// Returns the entry's label, or `None` if there was nothing to undo.
    ///
    /// # Errors
    ///
    /// [`HistoryError::GroupOpen`] while a group is being recorded.
    pub fn undo(&mut self, ctx: &mut C::Context) -> HistoryResult<Option<String>> {
        self.ensure_no_open_group()?;

        let Some(entry) = self.undo.pop_front() else {
            trace!("Nothing to undo");
            return Ok(None);
        };

        entry.undo(ctx);
        let label = entry.description().into_owned();
        debug!("Undid \"{label}\"");

        self.push_redo(entry);
        self.notify(StackChange::Undone, Some(label.clone()));
        Ok(Some(label))
    }

    /// Re-applies the top of the redo stack and moves it back to the undo stack.
    ///
    /// # Errors
    ///
    /// [`HistoryError::GroupOpen`] while a group is being recorded.
    pub fn redo(&mut self, ctx: &mut C::Context) -> HistoryResult<Option<String>> {
        self.ensure_no_open_group()?;

        let Some(entry) = self.redo.pop_front() else {
            trace!("Nothing to redo");
            return Ok(None);
        };

        entry.redo(ctx);
        let label = entry.description().into_owned();
        debug!("Redid \"{label}\"");

        self.push_undo(entry);
        self.notify(StackChange::Redone, Some(label.clone()));
        Ok(Some(label))
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    #[must_use]
    pub fn is_group_open(&self) -> bool {
        self.open_group.is_some()
    }

    #[must_use]
    pub fn open_group_name(&self) -> Option<&str> {
        self.open_group.as_ref().map(|group| group.name.as_str())
    }

    /// Label of the entry `undo` would revert, or the undo placeholder.
    #[must_use]
    pub fn undo_action_label(&self) -> Cow<'_, str> {
        self.undo.front().map_or_else(
            || Cow::Borrowed(self.config.undo_placeholder.as_str()),
            |entry| entry.description(),
        )
    }

    /// Label of the entry `redo` would re-apply, or the redo placeholder.
    #[must_use]
    pub fn redo_action_label(&self) -> Cow<'_, str> {
        self.redo.front().map_or_else(
            || Cow::Borrowed(self.config.redo_placeholder.as_str()),
            |entry| entry.description(),
        )
    }

    /// Button caption such as "Undo Move to (120,80)", or just "Undo".
    #[must_use]
    pub fn undo_menu_title(&self) -> String {
        menu_title(&self.config.undo_placeholder, self.undo.front())
    }

    /// Button caption such as "Redo Change Color", or just "Redo".
    #[must_use]
    pub fn redo_menu_title(&self) -> String {
        menu_title(&self.config.redo_placeholder, self.redo.front())
    }

    /// Undo entries, most recent first.
    #[must_use]
    pub fn undo_history(&self) -> Option<Vec<&Entry<C>>> {
        if self.undo.is_empty() {
            None
        } else {
            Some(self.undo.iter().collect())
        }
    }

    /// Redo entries, next to be redone first.
    #[must_use]
    pub fn redo_history(&self) -> Option<Vec<&Entry<C>>> {
        if self.redo.is_empty() {
            None
        } else {
            Some(self.redo.iter().collect())
        }
    }

    /// Drops both stacks and any open group without running any command.
    pub fn clear(&mut self) {
        let had_entries = self.can_undo() || self.can_redo();

        self.undo.clear();
        self.redo.clear();
        self.open_group = None;

        if had_entries {
            debug!("Cleared history");
            self.notify(StackChange::Cleared, None);
        }
    }

    /// Caps both stacks at `limit` entries, dropping the oldest right away.
    pub fn set_history_limit(&mut self, limit: NonZeroUsize) {
        self.config.history_limit = Some(limit);
        let limit = limit.get();

        let mut dropped = 0;
        while self.undo.len() > limit {
            self.undo.pop_back();
            dropped += 1;
        }

        while self.redo.len() > limit {
            self.redo.pop_back();
            dropped += 1;
        }

        if dropped > 0 {
            warn!("History limit {limit} dropped {dropped} entries");
            self.notify(StackChange::Trimmed, None);
        }
    }

    /// Registers `observer` for stack-changed notifications.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StackChanged) + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn ensure_no_open_group(&self) -> HistoryResult<()> {
        match &self.open_group {
            Some(open) => {
                warn!("Cannot move through history while \"{}\" is open", open.name);
                Err(HistoryError::GroupOpen {
                    open: open.name.clone(),
                })
            }
            None => Ok(()),
        }
    }

    fn record(&mut self, entry: Entry<C>, change: StackChange) {
        let label = entry.description().into_owned();
        debug!("Recorded \"{label}\"");

        self.push_undo(entry);

        if self.config.clear_redo_on_perform {
            self.redo.clear();
        }

        self.notify(change, Some(label));
    }

    fn push_undo(&mut self, entry: Entry<C>) {
        let limit = self.config.limit();
        while self.undo.len() >= limit {
            self.undo.pop_back();
            debug!("Dropped oldest undo entry");
        }

        self.undo.push_front(entry);
    }

    fn push_redo(&mut self, entry: Entry<C>) {
        let limit = self.config.limit();
        while self.redo.len() >= limit {
            self.redo.pop_back();
            debug!("Dropped oldest redo entry");
        }

        self.redo.push_front(entry);
    }

    fn notify(&mut self, change: StackChange, label: Option<String>) {
        let event = StackChanged {
            change,
            label,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            undo_depth: self.undo.len(),
            redo_depth: self.redo.len(),
        };
        self.observers.notify(&event);
    }
}

fn menu_title<C: Command>(placeholder: &str, top: Option<&Entry<C>>) -> String {
    match top {
        Some(entry) => format!("{placeholder} {}", entry.description()),
        None => placeholder.to_string(),
    }
}

impl<C: Command> Default for CommandHistory<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Command> fmt::Debug for CommandHistory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHistory")
            .field("undo_depth", &self.undo.len())
            .field("redo_depth", &self.redo.len())
            .field("open_group", &self.open_group_name())
            .field("config", &self.config)
            .field("observers", &self.observers)
            .finish()
    }
}

impl<C: Command> History<C> for CommandHistory<C> {
    fn perform(&mut self, command: C, ctx: &mut C::Context) {
        CommandHistory::perform(self, command, ctx);
    }

    fn undo(&mut self, ctx: &mut C::Context) -> HistoryResult<Option<String>> {
        CommandHistory::undo(self, ctx)
    }

    fn redo(&mut self, ctx: &mut C::Context) -> HistoryResult<Option<String>> {
        CommandHistory::redo(self, ctx)
    }

    fn can_undo(&self) -> bool {
        CommandHistory::can_undo(self)
    }

    fn can_redo(&self) -> bool {
        CommandHistory::can_redo(self)
    }

    fn set_history_limit(&mut self, limit: NonZeroUsize) {
        CommandHistory::set_history_limit(self, limit);
    }
}

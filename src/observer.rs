//! Stack-changed notifications.
//!
//! This is not a general event bus: a history fires one [`StackChanged`]
//! after every call that actually moved something between or off its stacks,
//! and every subscribed observer sees it.

use std::fmt;

/// What happened to the stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackChange {
    /// A single command was recorded.
    Performed,
    /// An open group was closed and recorded as one entry.
    GroupCommitted,
    Undone,
    Redone,
    /// Both stacks were emptied.
    Cleared,
    /// Entries were dropped to respect a lowered history limit.
    Trimmed,
}

/// Snapshot sent to observers after a stack mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackChanged {
    pub change: StackChange,
    /// Label of the entry that was recorded, undone or redone.
    pub label: Option<String>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&StackChanged)>;

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(crate) fn notify(&mut self, event: &StackChanged) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers").field("count", &self.len()).finish()
    }
}

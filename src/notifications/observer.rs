// SPDX-License-Identifier: MPL-2.0
//! Change observers for the active set.

use super::item::NotificationItem;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<C> = Box<dyn FnMut(&[NotificationItem<C>])>;

/// Observers notified with the new active set after it changes.
pub(crate) struct Observers<C> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback<C>)>,
}

impl<C> Observers<C> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, callback: Callback<C>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Returns true if the subscription existed.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, active: &[NotificationItem<C>]) {
        for (_, callback) in &mut self.entries {
            callback(active);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

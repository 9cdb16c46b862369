// SPDX-License-Identifier: MPL-2.0
//! Notification identity and the immutable record the engine tracks.

use super::method::{Method, Position, Priority};
use std::time::Instant;

/// Unique identifier for a notification.
///
/// Ids come from a process-wide counter and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// One pending or visible notification.
#[derive(Debug)]
pub struct NotificationItem<C> {
    id: NotificationId,
    content: C,
    method: Method,
    /// Informational; ordering never looks at it.
    timestamp: Instant,
}

impl<C> NotificationItem<C> {
    pub(crate) fn new(content: C, method: Method) -> Self {
        Self {
            id: NotificationId::new(),
            content,
            method,
            timestamp: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.method.priority()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.method.position()
    }

    #[must_use]
    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }
}

impl<C> PartialEq for NotificationItem<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for NotificationItem<C> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let a = NotificationItem::new("a", Method::toast());
        let b = NotificationItem::new("a", Method::toast());
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn ids_increase_monotonically() {
        let first = NotificationId::new();
        let second = NotificationId::new();
        assert!(second > first);
    }

    #[test]
    fn item_exposes_derived_method_properties() {
        let item = NotificationItem::new((), Method::Alert);
        assert_eq!(item.priority(), Priority::Immediate);
        assert_eq!(item.position(), Position::Center);
        assert!(item.timestamp() <= Instant::now());
    }
}

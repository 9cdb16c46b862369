// SPDX-License-Identifier: MPL-2.0
//! Cancellable single-shot timers for auto-dismiss.
//!
//! A [`Scheduler`] hands out a [`TimerHandle`] per scheduled timer. Fired
//! timers are never acted on where they fire: the owner of the engine
//! collects them with [`Scheduler::collect_expired`] and feeds them back
//! into the engine, which ignores any handle it no longer holds.

use super::item::NotificationId;
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Identifies one scheduling of a timer. Never reused by a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Allocates strictly increasing tokens.
#[derive(Debug, Default)]
pub(crate) struct TokenSource(u64);

impl TokenSource {
    pub(crate) fn next(&mut self) -> TimerToken {
        self.0 += 1;
        TimerToken(self.0)
    }
}

/// A scheduled auto-dismiss timer, also used as its fire event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    pub id: NotificationId,
    pub token: TimerToken,
}

/// Source of single-shot delayed events.
pub trait Scheduler {
    /// Schedules a timer for `id` that fires after `delay`.
    fn schedule(&mut self, id: NotificationId, delay: Duration) -> TimerHandle;

    /// Cancels a timer. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: &TimerHandle);

    /// Cancels every outstanding timer.
    fn cancel_all(&mut self);

    /// Returns timers that fired at or before `now`, oldest first.
    fn collect_expired(&mut self, now: Instant) -> Vec<TimerHandle>;

    /// Earliest outstanding deadline, when the scheduler knows it.
    fn next_deadline(&self) -> Option<Instant> {
        None
    }

    /// Number of outstanding timers.
    fn outstanding(&self) -> usize;
}

/// When a polled timer is due.
///
/// Delays past what `Instant` can represent never come due. They still
/// count as outstanding so cancellation stays symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Deadline {
    At(Instant),
    Never,
}

impl Deadline {
    fn after(start: Instant, delay: Duration) -> Self {
        start.checked_add(delay).map_or(Self::Never, Self::At)
    }
}

/// Deadline table polled from the owner's tick.
///
/// Timers never fire on their own; they are due once `collect_expired` is
/// called with a `now` past their deadline. This fits Iced's periodic
/// `Tick` subscription.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    tokens: TokenSource,
    deadlines: BTreeMap<(Deadline, TimerToken), NotificationId>,
    by_token: HashMap<TimerToken, Deadline>,
}

impl DeadlineScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules against an explicit start instant.
    pub fn schedule_at(
        &mut self,
        id: NotificationId,
        start: Instant,
        delay: Duration,
    ) -> TimerHandle {
        let token = self.tokens.next();
        let deadline = Deadline::after(start, delay);
        self.deadlines.insert((deadline, token), id);
        self.by_token.insert(token, deadline);
        TimerHandle { id, token }
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule(&mut self, id: NotificationId, delay: Duration) -> TimerHandle {
        self.schedule_at(id, Instant::now(), delay)
    }

    fn cancel(&mut self, handle: &TimerHandle) {
        if let Some(deadline) = self.by_token.remove(&handle.token) {
            self.deadlines.remove(&(deadline, handle.token));
        }
    }

    fn cancel_all(&mut self) {
        self.deadlines.clear();
        self.by_token.clear();
    }

    fn collect_expired(&mut self, now: Instant) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        while let Some(entry) = self.deadlines.first_entry() {
            let (deadline, token) = *entry.key();
            if deadline > Deadline::At(now) {
                break;
            }
            let id = entry.remove();
            self.by_token.remove(&token);
            fired.push(TimerHandle { id, token });
        }
        fired
    }

    fn next_deadline(&self) -> Option<Instant> {
        match self.deadlines.keys().next() {
            Some((Deadline::At(instant), _)) => Some(*instant),
            Some((Deadline::Never, _)) | None => None,
        }
    }

    fn outstanding(&self) -> usize {
        self.by_token.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_deadline_order() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        let (a, b) = (NotificationId::new(), NotificationId::new());

        let late = scheduler.schedule_at(a, start, Duration::from_secs(5));
        let early = scheduler.schedule_at(b, start, Duration::from_secs(1));

        assert_eq!(scheduler.next_deadline(), Some(start + Duration::from_secs(1)));
        assert!(scheduler.collect_expired(start).is_empty());

        let fired = scheduler.collect_expired(start + Duration::from_secs(10));
        assert_eq!(fired, vec![early, late]);
        assert_eq!(scheduler.outstanding(), 0);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        let handle = scheduler.schedule_at(NotificationId::new(), start, Duration::from_secs(1));

        scheduler.cancel(&handle);
        scheduler.cancel(&handle);

        assert!(scheduler
            .collect_expired(start + Duration::from_secs(2))
            .is_empty());
        assert!(scheduler.next_deadline().is_none());
    }

    #[test]
    fn fired_timers_fire_once() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        scheduler.schedule_at(NotificationId::new(), start, Duration::from_millis(10));

        let later = start + Duration::from_secs(1);
        assert_eq!(scheduler.collect_expired(later).len(), 1);
        assert!(scheduler.collect_expired(later).is_empty());
    }

    #[test]
    fn unrepresentable_delay_never_comes_due() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        let forever = scheduler.schedule_at(NotificationId::new(), start, Duration::MAX);
        let soon = scheduler.schedule_at(NotificationId::new(), start, Duration::from_secs(1));

        assert_eq!(scheduler.next_deadline(), Some(start + Duration::from_secs(1)));
        let fired = scheduler.collect_expired(start + Duration::from_secs(3600));
        assert_eq!(fired, vec![soon]);
        assert_eq!(scheduler.outstanding(), 1);
        assert!(scheduler.next_deadline().is_none());

        scheduler.cancel(&forever);
        assert_eq!(scheduler.outstanding(), 0);
    }

    #[test]
    fn tokens_are_unique_per_schedule() {
        let mut scheduler = DeadlineScheduler::new();
        let id = NotificationId::new();
        let first = scheduler.schedule(id, Duration::from_secs(1));
        let second = scheduler.schedule(id, Duration::from_secs(1));
        assert_ne!(first.token, second.token);
        assert_eq!(scheduler.outstanding(), 2);

        scheduler.cancel_all();
        assert_eq!(scheduler.outstanding(), 0);
    }
}

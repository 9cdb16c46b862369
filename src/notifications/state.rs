// SPDX-License-Identifier: MPL-2.0
//! The admission, queueing and auto-dismiss engine.
//!
//! `NotificationState` owns two sequences: the bounded active set (what is
//! on screen, in order) and the unbounded pending queue. Priority decides
//! where a new notification lands; promotion from the queue is FIFO.
//!
//! The engine is confined to one owner (the UI thread). Timers never touch
//! it directly: fired timers are handed back through [`NotificationState::tick`]
//! or [`NotificationState::handle_timer`], and a fire whose handle is no
//! longer registered is ignored.

use super::configuration::NotificationConfiguration;
use super::content::{auto_dismiss_delay, NotificationContent};
use super::item::{NotificationId, NotificationItem};
use super::layout::PositionGroups;
use super::method::{Method, Priority};
use super::observer::{Observers, SubscriptionId};
use super::timer::{DeadlineScheduler, Scheduler, TimerHandle};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, DismissReason, Placement};
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

type DismissCallback = Box<dyn FnOnce()>;

/// Notification queue and presentation state.
pub struct NotificationState<C, S: Scheduler = DeadlineScheduler> {
    configuration: NotificationConfiguration,
    /// Visible notifications, front first.
    active: Vec<NotificationItem<C>>,
    /// Notifications waiting for room, next-to-promote first.
    pending: VecDeque<NotificationItem<C>>,
    timers: HashMap<NotificationId, TimerHandle>,
    callbacks: HashMap<NotificationId, DismissCallback>,
    scheduler: S,
    observers: Observers<C>,
    diagnostics: Option<DiagnosticsHandle>,
    shut_down: bool,
}

impl<C: NotificationContent, S: Scheduler + Default> NotificationState<C, S> {
    /// Creates an engine with a default-constructed scheduler.
    #[must_use]
    pub fn new(configuration: NotificationConfiguration) -> Self {
        Self::with_scheduler(configuration, S::default())
    }
}

impl<C: NotificationContent, S: Scheduler> NotificationState<C, S> {
    #[must_use]
    pub fn with_scheduler(configuration: NotificationConfiguration, scheduler: S) -> Self {
        Self {
            configuration,
            active: Vec::new(),
            pending: VecDeque::new(),
            timers: HashMap::new(),
            callbacks: HashMap::new(),
            scheduler,
            observers: Observers::new(),
            diagnostics: None,
            shut_down: false,
        }
    }

    /// Sets the diagnostics handle for lifecycle logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    // -------------------------------------------------------------------------
    // Admission
    // -------------------------------------------------------------------------

    /// Enqueues `content` with the given presentation method.
    ///
    /// Returns the id of the new notification. After shutdown the id is
    /// fresh but never tracked.
    pub fn enqueue(&mut self, content: C, method: Method) -> NotificationId {
        self.admit(content, method, None)
    }

    /// Enqueues `content` and registers `on_dismiss`, invoked once when the
    /// notification is dismissed (manually, by its timer, or by
    /// [`dismiss_all`](Self::dismiss_all)).
    ///
    /// The callback is dropped without being called if the notification
    /// is cleared from the pending queue by an immediate-priority
    /// notification.
    pub fn enqueue_with_callback(
        &mut self,
        content: C,
        method: Method,
        on_dismiss: impl FnOnce() + 'static,
    ) -> NotificationId {
        self.admit(content, method, Some(Box::new(on_dismiss)))
    }

    fn admit(
        &mut self,
        content: C,
        method: Method,
        on_dismiss: Option<DismissCallback>,
    ) -> NotificationId {
        if self.shut_down {
            return NotificationId::new();
        }

        let item = NotificationItem::new(content, method);
        let id = item.id();
        let delay = auto_dismiss_delay(item.content());
        let priority = method.priority();

        if let Some(callback) = on_dismiss {
            self.callbacks.insert(id, callback);
        }

        self.observing(|state| {
            let has_room = state.has_room();
            let placement = match priority {
                Priority::Immediate => {
                    state.clear_pending_silently();
                    Placement::ActiveFront
                }
                Priority::High if has_room => Placement::ActiveFront,
                Priority::High => Placement::PendingFront,
                Priority::Normal if has_room => Placement::ActiveBack,
                Priority::Normal | Priority::Low => Placement::PendingBack,
            };

            match placement {
                Placement::ActiveFront => state.active.insert(0, item),
                Placement::ActiveBack => state.active.push(item),
                Placement::PendingFront => state.pending.push_front(item),
                Placement::PendingBack => state.pending.push_back(item),
            }
            if placement.is_active() {
                state.start_timer(id, delay);
            }

            state.log(DiagnosticEventKind::Enqueued {
                id: id.value(),
                priority: priority.rank(),
                placement,
            });

            state.promote();
        });

        id
    }

    /// Drops every pending item without invoking its callback.
    fn clear_pending_silently(&mut self) {
        let count = self.pending.len();
        if count == 0 {
            return;
        }
        for item in self.pending.drain(..) {
            self.callbacks.remove(&item.id());
        }
        self.log(DiagnosticEventKind::PendingCleared { count });
    }

    /// Moves pending items to the back of the active set while there is room.
    fn promote(&mut self) {
        while self.has_room() {
            let Some(item) = self.pending.pop_front() else {
                break;
            };
            let id = item.id();
            let delay = auto_dismiss_delay(item.content());
            self.active.push(item);
            self.start_timer(id, delay);
            self.log(DiagnosticEventKind::Promoted { id: id.value() });
        }
    }

    fn has_room(&self) -> bool {
        self.active.len() < self.configuration.max_concurrent.value()
    }

    fn start_timer(&mut self, id: NotificationId, delay: Option<Duration>) {
        let Some(delay) = delay else {
            return;
        };
        let handle = self.scheduler.schedule(id, delay);
        if let Some(previous) = self.timers.insert(id, handle) {
            self.scheduler.cancel(&previous);
        }
    }

    // -------------------------------------------------------------------------
    // Dismissal
    // -------------------------------------------------------------------------

    /// Dismisses the front of the active set. No-op when nothing is shown.
    pub fn dismiss_current(&mut self) {
        if let Some(id) = self.active.first().map(NotificationItem::id) {
            self.dismiss(id, DismissReason::Manual);
        }
    }

    /// Dismisses an active notification by id.
    ///
    /// Returns `false` (and does nothing) when `id` is not in the active
    /// set; pending notifications cannot be dismissed individually.
    pub fn dismiss_specific(&mut self, id: NotificationId) -> bool {
        if !self.is_active(id) {
            return false;
        }
        self.dismiss(id, DismissReason::Manual);
        true
    }

    /// Dismisses everything, invoking every registered callback once
    /// (active items first, then pending ones, each in order).
    pub fn dismiss_all(&mut self) {
        if self.shut_down {
            return;
        }

        self.scheduler.cancel_all();
        self.timers.clear();

        self.observing(|state| {
            let active = std::mem::take(&mut state.active);
            let pending = std::mem::take(&mut state.pending);
            for item in active.iter().chain(pending.iter()) {
                let id = item.id();
                let callback = state.callbacks.remove(&id);
                let callback_fired = callback.is_some();
                if let Some(callback) = callback {
                    callback();
                }
                state.log(DiagnosticEventKind::Dismissed {
                    id: id.value(),
                    reason: DismissReason::All,
                    callback_fired,
                });
            }
            state.callbacks.clear();
        });
    }

    /// The single removal path for active notifications.
    fn dismiss(&mut self, id: NotificationId, reason: DismissReason) {
        if self.shut_down {
            return;
        }

        self.observing(|state| {
            if let Some(timer) = state.timers.remove(&id) {
                state.scheduler.cancel(&timer);
            }

            let callback = state.callbacks.remove(&id);
            let callback_fired = callback.is_some();
            if let Some(callback) = callback {
                callback();
            }

            state.active.retain(|item| item.id() != id);
            state.log(DiagnosticEventKind::Dismissed {
                id: id.value(),
                reason,
                callback_fired,
            });

            state.promote();
        });
    }

    // -------------------------------------------------------------------------
    // Timers
    // -------------------------------------------------------------------------

    /// Collects timers that fired by `now` and dismisses their items.
    ///
    /// Returns the number of notifications that were auto-dismissed.
    pub fn tick(&mut self, now: Instant) -> usize {
        if self.shut_down {
            return 0;
        }
        let fired = self.scheduler.collect_expired(now);
        fired
            .into_iter()
            .filter(|handle| self.handle_timer(*handle))
            .count()
    }

    /// Applies one fired timer.
    ///
    /// The item is dismissed only if `handle` is still the registered timer
    /// for it; otherwise the fire is stale and ignored. Returns whether a
    /// dismissal happened.
    pub fn handle_timer(&mut self, handle: TimerHandle) -> bool {
        if self.shut_down {
            return false;
        }
        if self.timers.get(&handle.id) != Some(&handle) {
            self.log(DiagnosticEventKind::StaleTimer {
                id: handle.id.value(),
            });
            return false;
        }
        self.dismiss(handle.id, DismissReason::Expired);
        true
    }

    /// Earliest pending auto-dismiss deadline, when the scheduler knows it.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // -------------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------------

    /// Registers `observer`, called with the new active set after every
    /// operation that changed it.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&[NotificationItem<C>]) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Runs `mutation` and notifies observers if the active ids changed.
    fn observing(&mut self, mutation: impl FnOnce(&mut Self)) {
        let before: Vec<NotificationId> = self.active.iter().map(NotificationItem::id).collect();
        mutation(self);
        let changed = before.len() != self.active.len()
            || before
                .iter()
                .zip(&self.active)
                .any(|(id, item)| *id != item.id());
        if changed {
            self.observers.notify(&self.active);
        }
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Tears the engine down.
    ///
    /// Cancels every timer and drops every callback without calling it.
    /// Observers see one final, empty active set. Every later call is a
    /// silent no-op.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.log(DiagnosticEventKind::Shutdown {
            active: self.active.len(),
            pending: self.pending.len(),
        });

        self.scheduler.cancel_all();
        self.timers.clear();
        self.callbacks.clear();
        self.pending.clear();
        self.observing(|state| state.active.clear());
        self.observers.clear();
        self.shut_down = true;
    }

    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// True iff at least one notification is visible.
    #[must_use]
    pub fn is_presenting(&self) -> bool {
        !self.active.is_empty()
    }

    /// Visible notifications, front first.
    #[must_use]
    pub fn active(&self) -> &[NotificationItem<C>] {
        &self.active
    }

    /// Waiting notifications, next-to-promote first.
    pub fn pending(&self) -> impl Iterator<Item = &NotificationItem<C>> {
        self.pending.iter()
    }

    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_active(&self, id: NotificationId) -> bool {
        self.active.iter().any(|item| item.id() == id)
    }

    #[must_use]
    pub fn is_pending(&self, id: NotificationId) -> bool {
        self.pending.iter().any(|item| item.id() == id)
    }

    /// Whether `id` is active or pending.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.is_active(id) || self.is_pending(id)
    }

    /// Looks a notification up in either sequence.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&NotificationItem<C>> {
        self.active
            .iter()
            .chain(self.pending.iter())
            .find(|item| item.id() == id)
    }

    /// Whether `id` currently has a live auto-dismiss timer.
    #[must_use]
    pub fn has_timer(&self, id: NotificationId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Whether `id` currently has a registered dismissal callback.
    #[must_use]
    pub fn has_callback(&self, id: NotificationId) -> bool {
        self.callbacks.contains_key(&id)
    }

    /// The active set grouped the way the overlay draws it.
    #[must_use]
    pub fn active_by_position(&self) -> PositionGroups<'_, C> {
        PositionGroups::from_active(&self.active)
    }

    #[must_use]
    pub fn configuration(&self) -> &NotificationConfiguration {
        &self.configuration
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

impl<C, S: Scheduler> Drop for NotificationState<C, S> {
    fn drop(&mut self) {
        self.scheduler.cancel_all();
    }
}

impl<C, S: Scheduler + std::fmt::Debug> std::fmt::Debug for NotificationState<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationState")
            .field("configuration", &self.configuration)
            .field(
                "active",
                &self.active.iter().map(NotificationItem::id).collect::<Vec<_>>(),
            )
            .field(
                "pending",
                &self.pending.iter().map(NotificationItem::id).collect::<Vec<_>>(),
            )
            .field("timers", &self.timers.len())
            .field("callbacks", &self.callbacks.len())
            .field("scheduler", &self.scheduler)
            .field("shut_down", &self.shut_down)
            .finish_non_exhaustive()
    }
}

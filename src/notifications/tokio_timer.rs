// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed scheduler for owners that run an async event loop.
//!
//! Each timer is a spawned task that sleeps and then posts its handle on a
//! channel. Posting is all the task does; dismissal happens when the owner
//! drains the channel, so the engine is only ever touched from its own
//! context.

use super::item::NotificationId;
use super::timer::{Scheduler, TimerHandle, TimerToken, TokenSource};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

pub struct TokioScheduler {
    runtime: Handle,
    tokens: TokenSource,
    tasks: HashMap<TimerToken, AbortHandle>,
    fired_tx: mpsc::UnboundedSender<TimerHandle>,
    fired_rx: mpsc::UnboundedReceiver<TimerHandle>,
}

impl TokioScheduler {
    /// Creates a scheduler that spawns its timers on `runtime`.
    #[must_use]
    pub fn new(runtime: Handle) -> Self {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            tokens: TokenSource::default(),
            tasks: HashMap::new(),
            fired_tx,
            fired_rx,
        }
    }

    /// Creates a scheduler bound to the runtime of the calling context, or
    /// `None` outside of a Tokio runtime.
    #[must_use]
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }

    /// Waits for the next live timer to fire.
    ///
    /// Events of timers cancelled after they fired are skipped.
    pub async fn recv(&mut self) -> Option<TimerHandle> {
        loop {
            let handle = self.fired_rx.recv().await?;
            if self.tasks.remove(&handle.token).is_some() {
                return Some(handle);
            }
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, id: NotificationId, delay: Duration) -> TimerHandle {
        let handle = TimerHandle {
            id,
            token: self.tokens.next(),
        };
        let fired_tx = self.fired_tx.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver lives as long as the scheduler.
            let _ = fired_tx.send(handle);
        });
        self.tasks.insert(handle.token, task.abort_handle());
        handle
    }

    fn cancel(&mut self, handle: &TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle.token) {
            task.abort();
        }
    }

    fn cancel_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
        while self.fired_rx.try_recv().is_ok() {}
    }

    fn collect_expired(&mut self, _now: Instant) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        while let Ok(handle) = self.fired_rx.try_recv() {
            if self.tasks.remove(&handle.token).is_some() {
                fired.push(handle);
            }
        }
        fired
    }

    fn outstanding(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

impl std::fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioScheduler")
            .field("outstanding", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn timer_fires_after_delay() {
        let mut scheduler = TokioScheduler::try_current().expect("inside a runtime");
        let id = NotificationId::new();
        let handle = scheduler.schedule(id, Duration::from_secs(3));

        let fired = scheduler.recv().await.expect("timer fires");
        assert_eq!(fired, handle);
        assert_eq!(scheduler.outstanding(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_is_not_collected() {
        let mut scheduler = TokioScheduler::try_current().expect("inside a runtime");
        let cancelled = scheduler.schedule(NotificationId::new(), Duration::from_secs(1));
        let kept = scheduler.schedule(NotificationId::new(), Duration::from_secs(2));
        scheduler.cancel(&cancelled);

        tokio::time::sleep(Duration::from_secs(5)).await;

        let fired = scheduler.collect_expired(Instant::now());
        assert_eq!(fired, vec![kept]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_fire_discards_queued_event() {
        let mut scheduler = TokioScheduler::try_current().expect("inside a runtime");
        let handle = scheduler.schedule(NotificationId::new(), Duration::from_millis(100));

        tokio::time::sleep(Duration::from_secs(1)).await;
        scheduler.cancel(&handle);

        assert!(scheduler.collect_expired(Instant::now()).is_empty());
    }

    #[test]
    fn try_current_outside_runtime_is_none() {
        assert!(TokioScheduler::try_current().is_none());
    }
}

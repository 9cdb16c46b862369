// SPDX-License-Identifier: MPL-2.0
//! Engine driven by real Tokio timers on a paused clock.

use iced_notifier::notifications::{
    Method, NotificationConfiguration, NotificationState, Scheduler, SimpleNotification,
    TokioScheduler,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

type State = NotificationState<SimpleNotification, TokioScheduler>;

fn state() -> State {
    let scheduler = TokioScheduler::try_current().expect("inside a runtime");
    NotificationState::with_scheduler(NotificationConfiguration::default(), scheduler)
}

#[tokio::test(start_paused = true)]
async fn timers_dismiss_in_deadline_order() {
    let mut state = state();
    let slow = state.enqueue(
        SimpleNotification::info("slow").with_duration(Duration::from_secs(5)),
        Method::toast(),
    );
    let fast = state.enqueue(
        SimpleNotification::info("fast").with_duration(Duration::from_secs(1)),
        Method::toast(),
    );

    let first = state.scheduler_mut().recv().await.expect("timer fires");
    assert_eq!(first.id, fast);
    assert!(state.handle_timer(first));

    let second = state.scheduler_mut().recv().await.expect("timer fires");
    assert_eq!(second.id, slow);
    assert!(state.handle_timer(second));
    assert!(!state.is_presenting());
}

#[tokio::test(start_paused = true)]
async fn manual_dismiss_before_deadline_wins() {
    let mut state = state();
    let calls = Rc::new(Cell::new(0));
    let id = {
        let calls = Rc::clone(&calls);
        state.enqueue_with_callback(
            SimpleNotification::info("timed").with_duration(Duration::from_secs(2)),
            Method::toast(),
            move || calls.set(calls.get() + 1),
        )
    };

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(state.dismiss_specific(id));

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(state.tick(Instant::now()), 0);
    assert_eq!(calls.get(), 1);
    assert_eq!(state.scheduler().outstanding(), 0);
}

#[tokio::test(start_paused = true)]
async fn fire_racing_manual_dismiss_is_ignored() {
    let mut state = state();
    let calls = Rc::new(Cell::new(0));
    let id = {
        let calls = Rc::clone(&calls);
        state.enqueue_with_callback(
            SimpleNotification::info("timed").with_duration(Duration::from_millis(100)),
            Method::toast(),
            move || calls.set(calls.get() + 1),
        )
    };

    // The timer has fired and posted its event, but the owner dismisses
    // first.
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(state.dismiss_specific(id));
    assert_eq!(state.tick(Instant::now()), 0);
    assert_eq!(calls.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_outstanding_timers() {
    let mut state = state();
    for message in ["a", "b", "c"] {
        state.enqueue(
            SimpleNotification::info(message).with_duration(Duration::from_secs(1)),
            Method::toast(),
        );
    }
    assert_eq!(state.scheduler().outstanding(), 3);

    state.shutdown();
    assert_eq!(state.scheduler().outstanding(), 0);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(state.tick(Instant::now()), 0);
}

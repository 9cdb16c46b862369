// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::{Duration, Instant};

/// Ticks only while an auto-dismiss deadline is outstanding.
pub fn create_tick_subscription(next_deadline: Option<Instant>) -> Subscription<Message> {
    if next_deadline.is_some() {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Priority-aware notification queueing.
//!
//! [`NotificationState`] is the engine: a bounded active set, an unbounded
//! pending queue, per-item auto-dismiss timers and dismissal callbacks.
//! [`Notifier`] is the application-facing wrapper used by the view layer.
//!
//! # Example
//!
//! ```
//! use iced_notifier::notifications::{
//!     Method, NotificationConfiguration, Notifier, SimpleNotification,
//! };
//!
//! let mut notifier: Notifier<SimpleNotification> =
//!     Notifier::new(NotificationConfiguration::with_max_concurrent(2));
//! notifier.notify(SimpleNotification::info("Saved"));
//! notifier.notify_with(SimpleNotification::error("Disk full"), Method::Alert);
//! assert_eq!(notifier.active()[0].content().message(), "Disk full");
//! ```

mod configuration;
mod content;
mod item;
mod layout;
mod method;
mod notifier;
mod observer;
mod state;
mod timer;
mod tokio_timer;

pub use configuration::NotificationConfiguration;
pub use content::{HapticFeedback, NotificationContent, SimpleNotification, Sound, Style};
pub use item::{NotificationId, NotificationItem};
pub use layout::PositionGroups;
pub use method::{Alignment, Animation, Horizontal, Method, Position, Priority, Vertical};
pub use notifier::{FeedbackSink, Message, Notifier};
pub use observer::SubscriptionId;
pub use state::NotificationState;
pub use timer::{DeadlineScheduler, Scheduler, TimerHandle, TimerToken};
pub use tokio_timer::TokioScheduler;

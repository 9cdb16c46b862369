// SPDX-License-Identifier: MPL-2.0
//! Engine configuration, fixed at construction.

use crate::domain::notification::{AnimationDuration, DisplayDuration, MaxConcurrent, Spacing};

/// Immutable settings of a notification engine.
///
/// Only `max_concurrent` affects scheduling. `default_duration` is used by
/// the notifier when it builds text notifications; `animation_duration` and
/// `spacing` are read by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NotificationConfiguration {
    pub max_concurrent: MaxConcurrent,
    pub default_duration: DisplayDuration,
    pub animation_duration: AnimationDuration,
    pub spacing: Spacing,
}

impl NotificationConfiguration {
    /// Default configuration with a different bound on visible items.
    #[must_use]
    pub fn with_max_concurrent(max_concurrent: usize) -> Self {
        Self {
            max_concurrent: MaxConcurrent::new(max_concurrent),
            ..Self::default()
        }
    }
}

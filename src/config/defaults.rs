// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! The bounds themselves live in [`crate::domain`]; this module re-states
//! them under configuration names so settings code has a single place to
//! look.

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::notification::{
    animation_bounds, display_duration_bounds, max_concurrent_bounds, spacing_bounds,
};

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of notifications visible at once.
pub const DEFAULT_MAX_CONCURRENT: usize = max_concurrent_bounds::DEFAULT;

/// Minimum number of notifications visible at once.
pub const MIN_MAX_CONCURRENT: usize = max_concurrent_bounds::MIN;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default display duration in seconds.
pub const DEFAULT_DURATION_SECS: f32 = display_duration_bounds::DEFAULT_SECS;

/// Default animation duration in seconds.
pub const DEFAULT_ANIMATION_SECS: f32 = animation_bounds::DEFAULT_SECS;

/// Interval of the UI tick that drives auto-dismiss, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default gap between stacked notifications.
pub const DEFAULT_SPACING: f32 = spacing_bounds::DEFAULT;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Channel capacity between diagnostics handles and the collector.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 128;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sit_inside_bounds() {
        assert!(DEFAULT_MAX_CONCURRENT >= MIN_MAX_CONCURRENT);
        assert!(DEFAULT_DURATION_SECS > 0.0);
        assert!(DEFAULT_SPACING >= 0.0);
    }

    #[test]
    fn tick_is_finer_than_default_duration() {
        assert!((TICK_INTERVAL_MS as f32) < DEFAULT_DURATION_SECS * 1000.0);
    }
}

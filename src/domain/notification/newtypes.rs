// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! This module provides type-safe wrappers for the notifier configuration
//! values, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Max Concurrent Bounds
// =============================================================================

/// Bounds for the number of simultaneously visible notifications.
pub mod max_concurrent_bounds {
    /// At least one notification must be presentable.
    pub const MIN: usize = 1;
    /// Default number of visible notifications.
    pub const DEFAULT: usize = 3;
}

// =============================================================================
// MaxConcurrent
// =============================================================================

/// Size bound of the active set.
///
/// This newtype enforces validity at the type level, ensuring at least one
/// notification can be shown. There is no upper limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxConcurrent(usize);

impl MaxConcurrent {
    /// Creates a new bound, raising zero to the minimum.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.max(max_concurrent_bounds::MIN))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxConcurrent {
    fn default() -> Self {
        Self(max_concurrent_bounds::DEFAULT)
    }
}

// =============================================================================
// Display Duration Bounds
// =============================================================================

/// Default display duration bounds in seconds (0.5 to 60).
pub mod display_duration_bounds {
    /// Minimum default display duration in seconds.
    pub const MIN_SECS: f32 = 0.5;
    /// Maximum default display duration in seconds.
    pub const MAX_SECS: f32 = 60.0;
    /// Default display duration in seconds.
    pub const DEFAULT_SECS: f32 = 3.0;
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// Display time applied to notifications that do not pick their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDuration(f32);

impl DisplayDuration {
    /// Creates a new display duration from seconds, clamping to valid range.
    ///
    /// NaN collapses to the default.
    #[must_use]
    pub fn from_secs(secs: f32) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(
            display_duration_bounds::MIN_SECS,
            display_duration_bounds::MAX_SECS,
        ))
    }

    /// Returns the raw value in seconds.
    #[must_use]
    pub fn secs(self) -> f32 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f32(self.0)
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(display_duration_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Animation Duration Bounds
// =============================================================================

/// Animation duration bounds in seconds (0 to 2).
pub mod animation_bounds {
    /// Animations disabled.
    pub const MIN_SECS: f32 = 0.0;
    /// Maximum animation duration in seconds.
    pub const MAX_SECS: f32 = 2.0;
    /// Default animation duration in seconds.
    pub const DEFAULT_SECS: f32 = 0.3;
}

/// Duration of enter/exit transitions, consumed by the view layer only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDuration(f32);

impl AnimationDuration {
    /// Creates a new animation duration from seconds, clamping to valid range.
    #[must_use]
    pub fn from_secs(secs: f32) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(animation_bounds::MIN_SECS, animation_bounds::MAX_SECS))
    }

    /// Returns the raw value in seconds.
    #[must_use]
    pub fn secs(self) -> f32 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f32(self.0)
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(animation_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Spacing
// =============================================================================

/// Spacing bounds in logical pixels (0 to 64).
pub mod spacing_bounds {
    /// No gap between stacked notifications.
    pub const MIN: f32 = 0.0;
    /// Maximum gap in logical pixels.
    pub const MAX: f32 = 64.0;
    /// Default gap in logical pixels.
    pub const DEFAULT: f32 = 8.0;
}

/// Vertical gap between stacked notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing(f32);

impl Spacing {
    /// Creates a new spacing, clamping to valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(spacing_bounds::MIN, spacing_bounds::MAX))
    }

    /// Returns the raw value in logical pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self(spacing_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

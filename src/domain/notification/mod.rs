// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! This module provides pure domain types for the notifier configuration:
//! - [`MaxConcurrent`]: Size bound of the active set
//! - [`DisplayDuration`]: Fallback display time
//! - [`AnimationDuration`]: Transition time used by the view layer
//! - [`Spacing`]: Gap between stacked notifications

mod newtypes;

pub use newtypes::{
    animation_bounds, display_duration_bounds, max_concurrent_bounds, spacing_bounds,
    AnimationDuration, DisplayDuration, MaxConcurrent, Spacing,
};

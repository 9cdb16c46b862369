// SPDX-License-Identifier: MPL-2.0
//! Iced view layer for notifications.
//!
//! - [`toast`] - Notification cards and the positioned overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast;

pub use toast::{Toast, ToastContent};

// SPDX-License-Identifier: MPL-2.0
//! Domain layer - bounded value types with ZERO external dependencies.
//!
//! These newtypes validate and clamp user-facing settings so the rest of
//! the crate never sees out-of-range values.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`notification`]: Engine settings ([`MaxConcurrent`](notification::MaxConcurrent),
//!   [`DisplayDuration`](notification::DisplayDuration),
//!   [`AnimationDuration`](notification::AnimationDuration), [`Spacing`](notification::Spacing))

pub mod diagnostics;
pub mod notification;

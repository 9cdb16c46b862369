// SPDX-License-Identifier: MPL-2.0
//! `iced_notifier` is a priority-aware notification queue for Iced
//! applications.
//!
//! A bounded set of notifications is shown at once; the rest wait in a
//! FIFO queue. Priority decides where a new notification lands, timers
//! auto-dismiss it, and dismissal callbacks report when it goes away.

#![doc(html_root_url = "https://docs.rs/iced_notifier/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the notification engine.
//!
//! The engine logs lifecycle events (admission, promotion, dismissal,
//! stale timer fires, teardown) through a [`DiagnosticsHandle`]. A
//! [`DiagnosticsCollector`] keeps the most recent ones in a memory-bounded
//! [`CircularBuffer`] and can export them as a JSON report.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, DismissReason, Placement};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};

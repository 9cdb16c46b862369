// SPDX-License-Identifier: MPL-2.0
//! Lifecycle events recorded by the notification engine.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Where an enqueued notification initially landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    ActiveFront,
    ActiveBack,
    PendingFront,
    PendingBack,
}

impl Placement {
    /// Returns true if the notification became visible immediately.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Placement::ActiveFront | Placement::ActiveBack)
    }
}

/// What removed a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// `dismiss_current` or `dismiss_specific`.
    Manual,
    /// The auto-dismiss timer fired.
    Expired,
    /// `dismiss_all`.
    All,
}

/// A recorded event with its monotonic timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
///
/// Notification ids are recorded as raw counter values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Enqueued {
        id: u64,
        /// Priority rank, 0 (low) to 3 (immediate).
        priority: u8,
        placement: Placement,
    },
    Promoted {
        id: u64,
    },
    Dismissed {
        id: u64,
        reason: DismissReason,
        callback_fired: bool,
    },
    /// An immediate notification dropped the pending queue.
    PendingCleared {
        count: usize,
    },
    /// A timer fired for a notification that was already gone.
    StaleTimer {
        id: u64,
    },
    Shutdown {
        active: usize,
        pending: usize,
    },
}

impl DiagnosticEventKind {
    /// Stable snake_case name of the variant.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticEventKind::Enqueued { .. } => "enqueued",
            DiagnosticEventKind::Promoted { .. } => "promoted",
            DiagnosticEventKind::Dismissed { .. } => "dismissed",
            DiagnosticEventKind::PendingCleared { .. } => "pending_cleared",
            DiagnosticEventKind::StaleTimer { .. } => "stale_timer",
            DiagnosticEventKind::Shutdown { .. } => "shutdown",
        }
    }
}

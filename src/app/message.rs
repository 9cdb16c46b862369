// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Notification presets offered by the demo controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Toast,
    Banner,
    Low,
    Alert,
    FullScreen,
    Persistent,
    /// A toast whose dismissal bumps the dismissal counter.
    Tracked,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Toast,
        Preset::Banner,
        Preset::Low,
        Preset::Alert,
        Preset::FullScreen,
        Preset::Persistent,
        Preset::Tracked,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Preset::Toast => "Toast",
            Preset::Banner => "Banner",
            Preset::Low => "Low priority",
            Preset::Alert => "Alert",
            Preset::FullScreen => "Full screen",
            Preset::Persistent => "Persistent error",
            Preset::Tracked => "Tracked toast",
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Show(Preset),
    DismissCurrent,
    DismissAll,
    ExportDiagnostics,
    Notification(notifications::Message),
    Tick(Instant), // Periodic tick for auto-dismiss timers
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the configured bound on visible notifications.
    pub max_concurrent: Option<usize>,
    /// Reads settings from this file instead of the user config directory.
    pub config_path: Option<PathBuf>,
}

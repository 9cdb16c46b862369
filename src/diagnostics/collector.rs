// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing lifecycle events.
//!
//! The engine holds a [`DiagnosticsHandle`] and logs through it; the owner
//! of the [`DiagnosticsCollector`] drains the channel on its own schedule.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    ReportMetadata, SerializableEvent,
};
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;
use crate::error::{Error, Result};

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone. Events are sent via a bounded channel
/// so logging never blocks the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an event, dropping it if the channel is full.
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    /// Attempts to send an event, returning an error if the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the internal channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(
        &self,
        kind: DiagnosticEventKind,
    ) -> std::result::Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// Central collector for diagnostic events.
///
/// Events are stored in a memory-bounded circular buffer; old events are
/// evicted when the buffer reaches capacity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// When collection started (monotonic clock for duration calculations).
    collection_started_at: Instant,
    /// When collection started (wall clock for report metadata).
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the buffer.
    ///
    /// Call this periodically (e.g., on each UI tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report from the current buffer contents.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
            self.buffer.evicted(),
        );

        DiagnosticReport::new(metadata, events)
    }

    /// Exports all collected events as a JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.build_report().to_json()
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Export`] if serialization fails and [`Error::Io`]
    /// if the file cannot be written.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = self
            .export_json()
            .map_err(|e| Error::Export(e.to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DismissReason, Placement};
    use tempfile::tempdir;

    #[test]
    fn handle_events_reach_buffer_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log(DiagnosticEventKind::Promoted { id: 1 });
        handle.log(DiagnosticEventKind::StaleTimer { id: 2 });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for id in 0..DIAGNOSTICS_CHANNEL_CAPACITY as u64 {
            handle.log(DiagnosticEventKind::Promoted { id });
        }
        let overflow = handle.try_log(DiagnosticEventKind::Promoted { id: 999 });
        assert!(matches!(overflow, Err(TrySendError::Full(_))));
    }

    #[test]
    fn buffer_capacity_bounds_stored_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        let handle = collector.handle();
        for id in 0..40 {
            handle.log(DiagnosticEventKind::Promoted { id });
        }
        collector.process_pending();

        assert_eq!(collector.len(), 16);
        let report = collector.build_report();
        assert_eq!(report.metadata.evicted_count, 24);
    }

    #[test]
    fn report_summarizes_events() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log(DiagnosticEventKind::Enqueued {
            id: 1,
            priority: 1,
            placement: Placement::ActiveBack,
        });
        handle.log(DiagnosticEventKind::Dismissed {
            id: 1,
            reason: DismissReason::Expired,
            callback_fired: false,
        });
        collector.process_pending();

        let report = collector.build_report();
        assert_eq!(report.metadata.event_count, 2);
        assert_eq!(report.summary.count("enqueued"), 1);
        assert_eq!(report.summary.count("dismissed"), 1);
    }

    #[test]
    fn export_to_file_writes_json() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log(DiagnosticEventKind::Shutdown {
            active: 0,
            pending: 0,
        });
        collector.process_pending();

        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("reports").join("notifier.json");
        collector.export_to_file(&path).expect("export succeeds");

        let written = fs::read_to_string(&path).expect("file exists");
        assert!(written.contains("\"shutdown\""));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report generation and JSON export.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
    /// Crate version that generated the report
    pub version: String,
    /// When collection started (RFC 3339)
    pub collection_started_at: String,
    /// Duration of collection in milliseconds
    pub collection_duration_ms: u64,
    pub event_count: usize,
    /// Events dropped from the ring buffer before the report was built
    pub evicted_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
        evicted_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
            evicted_count,
        }
    }
}

/// A diagnostic event with its timestamp made relative to collection start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;

        Self { timestamp_ms, kind }
    }
}

/// Counts of events by kind name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub event_counts: BTreeMap<String, usize>,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        let mut event_counts = BTreeMap::new();
        for event in events {
            *event_counts.entry(event.kind.name().to_string()).or_insert(0) += 1;
        }
        Self { event_counts }
    }

    /// Count for one kind name, zero when absent.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.event_counts.get(name).copied().unwrap_or(0)
    }
}

/// A complete diagnostic report ready for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
    pub summary: ReportSummary,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            events,
            summary,
        }
    }

    /// Exports the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DismissReason;
    use std::time::Duration;

    #[test]
    fn serializable_event_calculates_relative_timestamp() {
        let start = Instant::now();
        let event = SerializableEvent::new(
            start + Duration::from_millis(1500),
            start,
            DiagnosticEventKind::Promoted { id: 1 },
        );
        assert_eq!(event.timestamp_ms, 1500);
    }

    #[test]
    fn serializable_event_serializes_with_flattened_kind() {
        let event = SerializableEvent {
            timestamp_ms: 42,
            kind: DiagnosticEventKind::StaleTimer { id: 9 },
        };
        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("\"timestamp_ms\":42"));
        assert!(json.contains("\"type\":\"stale_timer\""));
    }

    #[test]
    fn summary_counts_by_kind() {
        let events = vec![
            SerializableEvent {
                timestamp_ms: 0,
                kind: DiagnosticEventKind::Promoted { id: 1 },
            },
            SerializableEvent {
                timestamp_ms: 1,
                kind: DiagnosticEventKind::Promoted { id: 2 },
            },
            SerializableEvent {
                timestamp_ms: 2,
                kind: DiagnosticEventKind::Dismissed {
                    id: 1,
                    reason: DismissReason::Manual,
                    callback_fired: false,
                },
            },
        ];
        let summary = ReportSummary::from_events(&events);
        assert_eq!(summary.count("promoted"), 2);
        assert_eq!(summary.count("dismissed"), 1);
        assert_eq!(summary.count("shutdown"), 0);
    }

    #[test]
    fn report_to_json_produces_valid_json() {
        let metadata = ReportMetadata::new(Utc::now(), 10, 0, 0);
        let report = DiagnosticReport::new(metadata, Vec::new());
        let json = report.to_json().expect("serialize");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed["metadata"]["event_count"], 0);
    }
}

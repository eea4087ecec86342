//! Application telemetry events and sinks.
//!
//! Critic is a local tool, but it still benefits from lightweight telemetry
//! to support debugging and to capture operational signals such as review
//! round-trip latency.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Critic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records a review submission that the service answered with a review.
    ReviewCompleted {
        /// Round-trip time of the submission in milliseconds.
        latency_ms: u64,
        /// Number of issues the review carried.
        issue_count: usize,
        /// Number of free-text suggestions the review carried.
        suggestion_count: usize,
        /// Whether the service assigned a score.
        scored: bool,
    },
    /// Records a review submission that ended in an error.
    ReviewFailed {
        /// Round-trip time of the submission in milliseconds.
        latency_ms: u64,
        /// Coarse failure category, e.g. `rejected` or `network`.
        kind: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

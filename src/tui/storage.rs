//! Startup context storage and submission helpers for the review TUI.
//!
//! This module owns the global `OnceLock` values used during TUI bootstrapping
//! and provides the setter/getter functions consumed by CLI wiring and app
//! handlers.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::review::{
    Language, ReviewData, ReviewDepth, ReviewError, ReviewGateway, ReviewRequest,
};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Global storage for the review submission context.
///
/// This is set before the TUI program starts; submit commands read it to
/// reach the review service.
static SUBMIT_CONTEXT: OnceLock<SubmitContext> = OnceLock::new();

/// Global storage for initial editor contents and selections.
///
/// This is set before the TUI program starts and read by `ReviewApp::init()`.
static INITIAL_INPUT: OnceLock<InitialInput> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts and read by `ReviewApp::new()`
/// so the first frame uses the actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for telemetry sink.
///
/// This is set before the TUI program starts to enable review latency
/// metrics.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Context required to submit code to the review service.
struct SubmitContext {
    gateway: Arc<dyn ReviewGateway>,
}

/// Editor contents and selections the TUI starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialInput {
    /// Code pre-loaded into the editor, when `--code-file` was given.
    pub code: Option<String>,
    /// Initially selected language.
    pub language: Language,
    /// Review depth sent with every submission.
    pub depth: ReviewDepth,
}

/// Sets the review gateway used by submit commands.
///
/// This must be called before starting the bubbletea-rs program. Without it,
/// submissions fail with a configuration error.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_submit_context(gateway: Arc<dyn ReviewGateway>) -> bool {
    SUBMIT_CONTEXT.set(SubmitContext { gateway }).is_ok()
}

/// Sets the initial editor input for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The input
/// is read by `ReviewApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the input was set, `false` if it was already set.
pub fn set_initial_input(input: InitialInput) -> bool {
    INITIAL_INPUT.set(input).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// This should be called before starting the bubbletea-rs program so the
/// initial render can use the actual terminal size instead of fallbacks.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// This must be called before starting the bubbletea-rs program to enable
/// review latency metrics. Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the initial input from storage.
///
/// Called internally by `ReviewApp::init()`. Returns `None` when no input
/// was configured; the app then starts with an empty editor and defaults.
pub(crate) fn get_initial_input() -> Option<InitialInput> {
    INITIAL_INPUT.get().cloned()
}

/// Gets the initial terminal dimensions from storage.
///
/// Called internally by `ReviewApp::new()`. Returns the stored dimensions or
/// fallback dimensions if none were set.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

/// Submits a review request through the configured gateway.
///
/// Called by the submit command spawned from the update loop.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when no gateway was configured,
/// or the gateway's own error otherwise.
pub(crate) async fn submit_review(request: &ReviewRequest) -> Result<ReviewData, ReviewError> {
    let Some(context) = SUBMIT_CONTEXT.get() else {
        return Err(ReviewError::Configuration {
            message: "review gateway is not configured".to_owned(),
        });
    };

    let gateway = Arc::clone(&context.gateway);
    gateway.submit_review(request).await
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Records telemetry for a resolved review submission.
///
/// Called internally by the app after a submission resolves.
pub(crate) fn record_review_telemetry(
    latency_ms: u64,
    result: &Result<ReviewData, ReviewError>,
) {
    let event = match result {
        Ok(review) => TelemetryEvent::ReviewCompleted {
            latency_ms,
            issue_count: review.potential_issues.len(),
            suggestion_count: review.suggestions.len(),
            scored: review.score.is_some(),
        },
        Err(error) => TelemetryEvent::ReviewFailed {
            latency_ms,
            kind: error.kind().to_owned(),
        },
    };

    get_telemetry_sink().record(event);
}

//! One-shot mode submitting a single review without the TUI.
//!
//! Reads the snippet from the configured code file, or from standard input
//! when none is given, submits it, and prints the rendered report. Service
//! rejections print like any other report; only transport-level failures
//! exit non-zero.

use std::io::{self, Write};

use critic::review::{
    HttpReviewGateway, ReviewError, ReviewGateway, ReviewOutcome, ReviewRequest,
};
use critic::tui::components::{ReviewReportComponent, ReviewReportViewContext};
use critic::CriticConfig;

/// Width reports are wrapped to when not rendering into a live terminal.
const REPORT_WIDTH: usize = 80;

/// Runs the one-shot review mode.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The snippet cannot be read
/// - The request fails at the transport level
pub async fn run(config: &CriticConfig) -> Result<(), ReviewError> {
    let endpoint = config.resolve_endpoint()?;
    let gateway = HttpReviewGateway::new(endpoint, config.timeout())?;
    let language = config.resolve_language()?;
    let depth = config.resolve_depth()?;

    let code = match config.load_initial_code()? {
        Some(code) => code,
        None => read_code_from_stdin()?,
    };

    let request = ReviewRequest::new(code, language, depth);
    let outcome = match gateway.submit_review(&request).await {
        Ok(review) => ReviewOutcome::Ready(review),
        Err(ReviewError::Rejected { message }) => ReviewOutcome::Rejected { message },
        Err(error) => return Err(error),
    };

    write_report(&outcome)
}

fn read_code_from_stdin() -> Result<String, ReviewError> {
    io::read_to_string(io::stdin()).map_err(|error| ReviewError::Io {
        message: format!("failed to read code from stdin: {error}"),
    })
}

fn write_report(outcome: &ReviewOutcome) -> Result<(), ReviewError> {
    let component = ReviewReportComponent::new();
    let ctx = ReviewReportViewContext {
        outcome: Some(outcome),
        loading: false,
        max_width: REPORT_WIDTH,
        max_height: 0,
        scroll: 0,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", component.view(&ctx)).map_err(|error| ReviewError::Io {
        message: error.to_string(),
    })
}

//! TUI mode for composing and reviewing code snippets.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that submits code to the review service.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use critic::review::{HttpReviewGateway, ReviewError};
use critic::telemetry::StderrJsonlTelemetrySink;
use critic::tui::{
    InitialInput, ReviewApp, set_initial_input, set_initial_terminal_size, set_submit_context,
    set_telemetry_sink,
};
use critic::CriticConfig;

/// Runs the interactive review TUI.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The configured code file cannot be read
/// - The TUI fails to initialise
pub async fn run(config: &CriticConfig) -> Result<(), ReviewError> {
    let endpoint = config.resolve_endpoint()?;
    let gateway = HttpReviewGateway::new(endpoint, config.timeout())?;
    let language = config.resolve_language()?;
    let depth = config.resolve_depth()?;
    let code = config.load_initial_code()?;

    // Store the submit context and initial input for Model::init() to
    // retrieve. If already set (e.g. re-running the TUI in the same
    // process), this is a no-op and the existing context remains.
    let _ = set_submit_context(Arc::new(gateway));
    let _ = set_initial_input(InitialInput {
        code,
        language,
        depth,
    });
    let _ = set_telemetry_sink(Arc::new(StderrJsonlTelemetrySink));

    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    // Run the TUI program
    run_tui().await.map_err(|error| ReviewError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `ReviewApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // Build and run the program using the builder pattern.
    // ReviewApp::init() will retrieve context from module-level storage.
    let program = Program::<ReviewApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}

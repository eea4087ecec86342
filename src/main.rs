//! Critic CLI entrypoint for AI code review.

use std::io::{self, Write};
use std::process::ExitCode;

use critic::{CriticConfig, OperationMode, ReviewError};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Initialises stderr tracing filtered by `RUST_LOG`.
///
/// Stderr keeps diagnostics out of the terminal UI and report output on
/// stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

async fn run() -> Result<(), ReviewError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::HealthCheck => cli::health_check::run(&config).await,
        OperationMode::OneShot => cli::one_shot::run(&config).await,
        OperationMode::ReviewTui => cli::review_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CriticConfig, ReviewError> {
    CriticConfig::load().map_err(|error| ReviewError::Configuration {
        message: error.to_string(),
    })
}

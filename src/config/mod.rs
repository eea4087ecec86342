//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.critic.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `CRITIC_ENDPOINT`, `CRITIC_LANGUAGE`, etc.
//! 4. **Command-line arguments** – `--endpoint`/`-e`, `--language`/`-l`, etc.
//!
//! # Configuration File
//!
//! Place `.critic.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! endpoint = "http://127.0.0.1:8000"
//! language = "python"
//! depth = "medium"
//! timeout_seconds = 120
//! ```

use std::fs;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::review::{Language, ReviewDepth, ReviewError, ServiceEndpoint};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Probe the review service's health endpoint and exit.
    HealthCheck,
    /// Submit one review non-interactively and print the report.
    OneShot,
    /// Interactive TUI for composing and reviewing code snippets.
    ReviewTui,
}

/// Endpoint used when none is configured.
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `CRITIC_ENDPOINT` or `--endpoint`: Review service base URL
/// - `CRITIC_LANGUAGE` or `--language`: Initial snippet language
/// - `CRITIC_CODE_FILE` or `--code-file`: File preloaded into the editor
/// - `CRITIC_DEPTH` or `--depth`: Review depth sent to the service
/// - `CRITIC_TIMEOUT_SECONDS` or `--timeout-seconds`: Request timeout
///
/// # Example
///
/// ```no_run
/// use critic::CriticConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CriticConfig::load().expect("failed to load configuration");
/// let endpoint = config.resolve_endpoint().expect("endpoint should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CRITIC",
    discovery(
        dotfile_name = ".critic.toml",
        config_file_name = "critic.toml",
        app_name = "critic"
    )
)]
pub struct CriticConfig {
    /// Base URL of the review service.
    ///
    /// Can be provided via:
    /// - CLI: `--endpoint <URL>` or `-e <URL>`
    /// - Environment: `CRITIC_ENDPOINT`
    /// - Config file: `endpoint = "..."`
    ///
    /// Defaults to `http://127.0.0.1:8000` when unset.
    #[ortho_config(cli_short = 'e')]
    pub endpoint: Option<String>,

    /// Language the snippet is written in (`python`, `javascript`, or `cpp`).
    ///
    /// Can be provided via:
    /// - CLI: `--language <LANG>` or `-l <LANG>`
    /// - Environment: `CRITIC_LANGUAGE`
    /// - Config file: `language = "..."`
    #[ortho_config(cli_short = 'l')]
    pub language: Option<String>,

    /// Path to a file whose contents pre-populate the code editor.
    ///
    /// In one-shot mode this is the snippet submitted for review; when it is
    /// absent, one-shot mode reads the snippet from standard input instead.
    ///
    /// Can be provided via:
    /// - CLI: `--code-file <PATH>` or `-f <PATH>`
    /// - Environment: `CRITIC_CODE_FILE`
    /// - Config file: `code_file = "..."`
    #[ortho_config(cli_short = 'f')]
    pub code_file: Option<String>,

    /// Review depth requested from the service (`quick`, `medium`, or
    /// `thorough`).
    ///
    /// Can be provided via:
    /// - CLI: `--depth <DEPTH>` or `-d <DEPTH>`
    /// - Environment: `CRITIC_DEPTH`
    /// - Config file: `depth = "..."`
    ///
    /// Defaults to `medium` when unset.
    #[ortho_config(cli_short = 'd')]
    pub depth: Option<String>,

    /// Overall request timeout in seconds.
    ///
    /// No timeout is applied when unset; reviews invoke a language model and
    /// can legitimately run long.
    ///
    /// Can be provided via:
    /// - CLI: `--timeout-seconds <SECONDS>`
    /// - Environment: `CRITIC_TIMEOUT_SECONDS`
    /// - Config file: `timeout_seconds = 120`
    #[ortho_config()]
    pub timeout_seconds: Option<u64>,

    /// Submits one review non-interactively and prints the report.
    ///
    /// Can be provided via:
    /// - CLI: `--one-shot`
    /// - Config file: `one_shot = true`
    ///
    /// Note: Environment variable `CRITIC_ONE_SHOT` is not supported because
    /// `ortho_config` does not load boolean values from the environment.
    #[ortho_config()]
    pub one_shot: bool,

    /// Probes the service's health endpoint and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--check-service`
    /// - Config file: `check_service = true`
    ///
    /// Note: Environment variable `CRITIC_CHECK_SERVICE` is not supported
    /// because `ortho_config` does not load boolean values from the
    /// environment.
    #[ortho_config()]
    pub check_service: bool,
}

impl Default for CriticConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            language: None,
            code_file: None,
            depth: None,
            timeout_seconds: None,
            one_shot: false,
            check_service: false,
        }
    }
}

impl CriticConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// `--check-service` wins over `--one-shot`; with neither set the
    /// interactive TUI runs.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.check_service {
            OperationMode::HealthCheck
        } else if self.one_shot {
            OperationMode::OneShot
        } else {
            OperationMode::ReviewTui
        }
    }

    /// Resolves the configured endpoint, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidEndpoint`] when the configured value is
    /// not a usable HTTP base URL.
    pub fn resolve_endpoint(&self) -> Result<ServiceEndpoint, ReviewError> {
        ServiceEndpoint::parse(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    }

    /// Resolves the configured language, defaulting to Python.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] for values outside the
    /// supported set.
    pub fn resolve_language(&self) -> Result<Language, ReviewError> {
        self.language
            .as_deref()
            .map_or_else(|| Ok(Language::default()), Language::parse)
    }

    /// Resolves the configured review depth, defaulting to medium.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] for values outside the
    /// supported set.
    pub fn resolve_depth(&self) -> Result<ReviewDepth, ReviewError> {
        self.depth
            .as_deref()
            .map_or_else(|| Ok(ReviewDepth::default()), ReviewDepth::parse)
    }

    /// Request timeout as a duration, when one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Reads the configured code file, when one is set.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Io`] when the file cannot be read.
    pub fn load_initial_code(&self) -> Result<Option<String>, ReviewError> {
        let Some(path) = self.code_file.as_deref() else {
            return Ok(None);
        };

        fs::read_to_string(path)
            .map(Some)
            .map_err(|error| ReviewError::Io {
                message: format!("failed to read code file '{path}': {error}"),
            })
    }
}

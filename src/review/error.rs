//! Error types exposed by the review submission layer.

use thiserror::Error;

/// Errors surfaced while configuring the client or communicating with the
/// review service.
///
/// Payloads are plain strings so the error can be cloned into the TUI update
/// loop and compared in tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The review service base URL could not be parsed or uses an
    /// unsupported scheme.
    #[error("review service endpoint is invalid: {0}")]
    InvalidEndpoint(String),

    /// Networking failed while calling the review service.
    #[error("network error talking to the review service: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The review service answered with a non-success HTTP status.
    #[error("review service returned status {status}: {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Truncated response body describing the failure.
        message: String,
    },

    /// The response body did not match the expected envelope shape.
    #[error("review response could not be decoded: {message}")]
    Decode {
        /// Detail from the JSON decoder or envelope validation.
        message: String,
    },

    /// The service processed the request but reported a failure
    /// (`ok: false` in the response envelope).
    #[error("review rejected: {}", .message.as_deref().unwrap_or("no detail supplied"))]
    Rejected {
        /// Service-supplied error message, when one was present.
        message: Option<String>,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ReviewError {
    /// Returns true for the service-reported tier of failures.
    ///
    /// Rejections render inline in the results pane with the
    /// service-supplied message; every other variant is a transport-level
    /// failure surfaced as a generic notice.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Stable label for the error's category, used in telemetry.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configuration",
            Self::InvalidEndpoint(_) => "invalid_endpoint",
            Self::Network { .. } => "network",
            Self::Api { .. } => "api",
            Self::Decode { .. } => "decode",
            Self::Rejected { .. } => "rejected",
            Self::Io { .. } => "io",
        }
    }
}

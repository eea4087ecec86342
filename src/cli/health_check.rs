//! Health-check mode probing the review service.

use std::io::{self, Write};

use critic::review::{HttpReviewGateway, ReviewError, ReviewGateway};
use critic::CriticConfig;

/// Probes the review service's health endpoint and prints its status.
///
/// # Errors
///
/// Returns an error if:
/// - The configured endpoint is invalid
/// - The service is unreachable or answers with a failure status
pub async fn run(config: &CriticConfig) -> Result<(), ReviewError> {
    let endpoint = config.resolve_endpoint()?;
    let gateway = HttpReviewGateway::new(endpoint, config.timeout())?;

    let health = gateway.health().await?;

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "review service at {} reports status: {}",
        gateway.endpoint().as_str(),
        health.status
    )
    .map_err(|error| ReviewError::Io {
        message: error.to_string(),
    })
}

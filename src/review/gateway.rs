//! HTTP gateway for the review service.
//!
//! The trait-based design enables mocking in tests while
//! [`HttpReviewGateway`] handles real requests with reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::endpoint::ServiceEndpoint;
use super::error::ReviewError;
use super::models::{ReviewData, ReviewEnvelope, ReviewRequest, ServiceHealth};

/// Cap on error-body text echoed back into error messages.
const ERROR_BODY_PREVIEW_CHARS: usize = 160;

/// How long to wait for a TCP connection before giving up.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway that can submit code to the review service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Submits one review request and returns the parsed review.
    async fn submit_review(&self, request: &ReviewRequest) -> Result<ReviewData, ReviewError>;

    /// Probes the service's health endpoint.
    async fn health(&self) -> Result<ServiceHealth, ReviewError>;
}

/// Production gateway speaking JSON over HTTP to the review service.
#[derive(Debug, Clone)]
pub struct HttpReviewGateway {
    endpoint: ServiceEndpoint,
    client: Client,
}

impl HttpReviewGateway {
    /// Builds a gateway for the given endpoint.
    ///
    /// A request timeout is applied only when `timeout` is provided; the
    /// service performs a model call per review and can legitimately take
    /// a long time.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the HTTP client cannot
    /// be constructed.
    pub fn new(endpoint: ServiceEndpoint, timeout: Option<Duration>) -> Result<Self, ReviewError> {
        let mut builder = Client::builder().connect_timeout(CONNECT_TIMEOUT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|error| ReviewError::Configuration {
            message: format!("failed to configure HTTP client: {error}"),
        })?;

        Ok(Self { endpoint, client })
    }

    /// Endpoint this gateway talks to.
    #[must_use]
    pub const fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl ReviewGateway for HttpReviewGateway {
    async fn submit_review(&self, request: &ReviewRequest) -> Result<ReviewData, ReviewError> {
        let url = self.endpoint.review_url();
        tracing::debug!(%url, language = request.language.label(), "submitting review");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|error| ReviewError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.map_or_else(
                |_| "(failed to read error response body)".to_owned(),
                |content| truncate_for_message(&content, ERROR_BODY_PREVIEW_CHARS),
            );
            return Err(ReviewError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ReviewEnvelope =
            response.json().await.map_err(|error| ReviewError::Decode {
                message: error.to_string(),
            })?;

        envelope.into_review()
    }

    async fn health(&self) -> Result<ServiceHealth, ReviewError> {
        let url = self.endpoint.health_url();
        tracing::debug!(%url, "probing service health");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| ReviewError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::Api {
                status: status.as_u16(),
                message: "health probe failed".to_owned(),
            });
        }

        response.json().await.map_err(|error| ReviewError::Decode {
            message: error.to_string(),
        })
    }
}

/// Truncates a response body for inclusion in an error message.
fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

//! Validated review service endpoint and derived request URLs.

use url::Url;

use super::error::ReviewError;

/// Base URL of the review service with the request URLs derived from it.
///
/// Wrapping the URL keeps validation in one place and prevents stringly
/// typed endpoints from leaking through the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    base: Url,
}

impl ServiceEndpoint {
    /// Parses and validates a base URL.
    ///
    /// Only `http` and `https` schemes are accepted. A missing trailing
    /// slash is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidEndpoint`] when the value is not a
    /// URL or uses another scheme.
    pub fn parse(value: &str) -> Result<Self, ReviewError> {
        let base = Url::parse(value.trim())
            .map_err(|error| ReviewError::InvalidEndpoint(error.to_string()))?;

        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(ReviewError::InvalidEndpoint(format!(
                "unsupported scheme '{}' (expected http or https)",
                base.scheme()
            )));
        }

        if base.host_str().is_none() {
            return Err(ReviewError::InvalidEndpoint(
                "endpoint is missing a host".to_owned(),
            ));
        }

        Ok(Self { base })
    }

    /// URL of the review submission endpoint.
    #[must_use]
    pub fn review_url(&self) -> Url {
        self.join("review")
    }

    /// URL of the health probe endpoint.
    #[must_use]
    pub fn health_url(&self) -> Url {
        self.join("health")
    }

    /// Base URL as text, for display.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.base.as_str()
    }

    fn join(&self, segment: &str) -> Url {
        let mut url = self.base.clone();
        // Url::join would drop a non-slash-terminated final path segment;
        // appending through path_segments_mut keeps the base path intact.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }
}

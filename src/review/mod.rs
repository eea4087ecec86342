//! Review service integration.
//!
//! This module owns everything between the UI and the review service: the
//! request and response models, the validated endpoint, the gateway trait
//! with its HTTP implementation, and the error taxonomy.

mod endpoint;
mod error;
mod gateway;
mod models;

pub use endpoint::ServiceEndpoint;
pub use error::ReviewError;
pub use gateway::{HttpReviewGateway, ReviewGateway};
#[cfg(test)]
pub(crate) use gateway::MockReviewGateway;
pub use models::{
    Language, PotentialIssue, ReviewData, ReviewDepth, ReviewOutcome, ReviewRequest,
    ServiceHealth,
};
#[cfg(any(test, feature = "test-support"))]
pub use models::test_support;

//! Critic library crate providing an AI code-review client.
//!
//! The library wraps the review service's HTTP API behind a typed gateway,
//! models the review report, and provides a terminal user interface for
//! composing snippets and reading reviews.

pub mod config;
pub mod review;
pub mod telemetry;
pub mod tui;

pub use config::{CriticConfig, OperationMode};
pub use review::{
    HttpReviewGateway, Language, PotentialIssue, ReviewData, ReviewDepth, ReviewError,
    ReviewGateway, ReviewOutcome, ReviewRequest, ServiceEndpoint, ServiceHealth,
};

//! Data models for review submissions and service responses.
//!
//! Wire-format structs (`Api*`, the response envelope) are kept separate
//! from the domain types handed to the UI, with `From` conversions between
//! them, so serde defaults and shape quirks stay at the boundary.

use serde::{Deserialize, Serialize};

use super::error::ReviewError;

/// Languages the review service understands.
///
/// The set mirrors the service's fixed selector; extending it means adding a
/// variant here and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python source.
    #[default]
    Python,
    /// JavaScript source.
    Javascript,
    /// C++ source.
    Cpp,
}

impl Language {
    /// Human-readable label for display in the language bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Javascript => "JavaScript",
            Self::Cpp => "C++",
        }
    }

    /// Returns the next language in the fixed selector order.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Python => Self::Javascript,
            Self::Javascript => Self::Cpp,
            Self::Cpp => Self::Python,
        }
    }

    /// Parses a configuration value into a language.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] for values outside the
    /// supported set.
    pub fn parse(value: &str) -> Result<Self, ReviewError> {
        match value.trim().to_lowercase().as_str() {
            "python" => Ok(Self::Python),
            "javascript" => Ok(Self::Javascript),
            "cpp" => Ok(Self::Cpp),
            other => Err(ReviewError::Configuration {
                message: format!(
                    "unsupported language '{other}' (expected python, javascript, or cpp)"
                ),
            }),
        }
    }
}

/// How thorough a review the service is asked to perform.
///
/// The terminal UI always submits the default; the value is configurable
/// because the service accepts it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDepth {
    /// Fast, surface-level pass.
    Quick,
    /// Balanced pass.
    #[default]
    Medium,
    /// Slow, detailed pass.
    Thorough,
}

impl ReviewDepth {
    /// Parses a configuration value into a review depth.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] for values outside the
    /// supported set.
    pub fn parse(value: &str) -> Result<Self, ReviewError> {
        match value.trim().to_lowercase().as_str() {
            "quick" => Ok(Self::Quick),
            "medium" => Ok(Self::Medium),
            "thorough" => Ok(Self::Thorough),
            other => Err(ReviewError::Configuration {
                message: format!(
                    "unsupported depth '{other}' (expected quick, medium, or thorough)"
                ),
            }),
        }
    }

    /// Wire value as sent to the service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Medium => "medium",
            Self::Thorough => "thorough",
        }
    }
}

/// Immutable snapshot of the input state sent as the request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRequest {
    /// The code snippet under review; may be empty.
    pub code: String,
    /// Target language of the snippet.
    pub language: Language,
    /// Requested review depth.
    pub depth: ReviewDepth,
    /// Free-form context for the reviewer; fixed empty in this client.
    pub context: String,
}

impl ReviewRequest {
    /// Builds a request with the fixed defaults merged in.
    #[must_use]
    pub const fn new(code: String, language: Language, depth: ReviewDepth) -> Self {
        Self {
            code,
            language,
            depth,
            context: String::new(),
        }
    }
}

/// One issue the reviewer found in the snippet.
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialIssue {
    /// Short issue title.
    pub issue: String,
    /// Severity label; the service may omit it.
    pub severity: Option<String>,
    /// Why this is a problem.
    pub explanation: String,
    /// Concrete fix, when the service offers one.
    pub suggested_fix: Option<String>,
}

/// A successfully parsed review.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewData {
    /// Overall summary text.
    pub summary: String,
    /// Ordered list of issues; empty when the service found none.
    pub potential_issues: Vec<PotentialIssue>,
    /// Ordered list of free-text suggestions.
    pub suggestions: Vec<String>,
    /// Numeric score out of 100, when the service assigned one.
    pub score: Option<f64>,
}

impl ReviewData {
    /// Score to display, if any.
    ///
    /// A score of exactly zero is treated as absent. The original client
    /// used a truthiness check here and the behaviour is preserved
    /// deliberately.
    #[must_use]
    pub fn displayable_score(&self) -> Option<f64> {
        self.score.filter(|score| *score != 0.0)
    }
}

/// Final outcome of one submission cycle, as held by the UI.
///
/// Transport-level failures are not part of this type; they are surfaced as
/// a status-bar notice instead of a results-pane entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    /// The service returned a well-formed review.
    Ready(ReviewData),
    /// The service processed the request but reported a failure.
    Rejected {
        /// Service-supplied message, when present.
        message: Option<String>,
    },
}

/// Status reported by the service's health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceHealth {
    /// Status string, `"ok"` when the service is up.
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReviewEnvelope {
    pub(crate) ok: bool,
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) review: Option<ApiReview>,
}

impl ReviewEnvelope {
    /// Classifies the envelope into a review or an error.
    ///
    /// An envelope claiming success without carrying a review is a shape
    /// violation and maps to [`ReviewError::Decode`].
    pub(crate) fn into_review(self) -> Result<ReviewData, ReviewError> {
        if !self.ok {
            return Err(ReviewError::Rejected {
                message: self.error,
            });
        }

        self.review
            .map(ReviewData::from)
            .ok_or_else(|| ReviewError::Decode {
                message: "envelope marked ok but carried no review".to_owned(),
            })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReview {
    pub(crate) summary: String,
    #[serde(default)]
    pub(crate) potential_issues: Vec<ApiIssue>,
    #[serde(default)]
    pub(crate) suggestions: Vec<String>,
    #[serde(default)]
    pub(crate) score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiIssue {
    pub(crate) issue: String,
    #[serde(default)]
    pub(crate) severity: Option<String>,
    pub(crate) explanation: String,
    #[serde(default)]
    pub(crate) suggested_fix: Option<String>,
}

impl From<ApiReview> for ReviewData {
    fn from(value: ApiReview) -> Self {
        Self {
            summary: value.summary,
            potential_issues: value
                .potential_issues
                .into_iter()
                .map(PotentialIssue::from)
                .collect(),
            suggestions: value.suggestions,
            score: value.score,
        }
    }
}

impl From<ApiIssue> for PotentialIssue {
    fn from(value: ApiIssue) -> Self {
        Self {
            issue: value.issue,
            severity: value.severity,
            explanation: value.explanation,
            suggested_fix: value.suggested_fix,
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    //! Builders for review data used by unit and integration tests.

    use super::{PotentialIssue, ReviewData};

    /// Review with only a summary; issue and suggestion lists are empty.
    #[must_use]
    pub fn minimal_review(summary: &str) -> ReviewData {
        ReviewData {
            summary: summary.to_owned(),
            potential_issues: Vec::new(),
            suggestions: Vec::new(),
            score: None,
        }
    }

    /// Issue with a title and explanation and nothing optional.
    #[must_use]
    pub fn minimal_issue(issue: &str, explanation: &str) -> PotentialIssue {
        PotentialIssue {
            issue: issue.to_owned(),
            severity: None,
            explanation: explanation.to_owned(),
            suggested_fix: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn review_request_serialises_with_wire_field_names() {
        let request = ReviewRequest::new("print(1)".to_owned(), Language::Python, ReviewDepth::Medium);

        let body = serde_json::to_value(&request).expect("request should serialise");

        assert_eq!(
            body,
            json!({
                "code": "print(1)",
                "language": "python",
                "depth": "medium",
                "context": "",
            })
        );
    }

    #[rstest]
    #[case::python("python", Language::Python)]
    #[case::javascript("javascript", Language::Javascript)]
    #[case::cpp("cpp", Language::Cpp)]
    #[case::mixed_case(" Python ", Language::Python)]
    fn language_parse_accepts_supported_values(#[case] input: &str, #[case] expected: Language) {
        assert_eq!(Language::parse(input), Ok(expected));
    }

    #[test]
    fn language_parse_rejects_unknown_value() {
        let error = Language::parse("cobol").expect_err("cobol should be rejected");
        assert!(matches!(error, ReviewError::Configuration { .. }));
    }

    #[test]
    fn language_cycle_visits_every_variant() {
        let start = Language::Python;
        let second = start.cycled();
        let third = second.cycled();

        assert_eq!(second, Language::Javascript);
        assert_eq!(third, Language::Cpp);
        assert_eq!(third.cycled(), start, "cycle should wrap around");
    }

    #[test]
    fn envelope_with_ok_false_becomes_rejection() {
        let envelope: ReviewEnvelope =
            serde_json::from_value(json!({ "ok": false, "error": "model unavailable" }))
                .expect("envelope should deserialise");

        let error = envelope.into_review().expect_err("ok=false should reject");

        assert_eq!(
            error,
            ReviewError::Rejected {
                message: Some("model unavailable".to_owned()),
            }
        );
    }

    #[test]
    fn envelope_with_ok_false_and_no_message_keeps_message_absent() {
        let envelope: ReviewEnvelope =
            serde_json::from_value(json!({ "ok": false })).expect("envelope should deserialise");

        let error = envelope.into_review().expect_err("ok=false should reject");

        assert_eq!(error, ReviewError::Rejected { message: None });
    }

    #[test]
    fn envelope_claiming_success_without_review_is_a_decode_error() {
        let envelope: ReviewEnvelope =
            serde_json::from_value(json!({ "ok": true })).expect("envelope should deserialise");

        let error = envelope
            .into_review()
            .expect_err("ok=true without review should fail");

        assert!(matches!(error, ReviewError::Decode { .. }));
    }

    #[test]
    fn envelope_defaults_missing_lists_to_empty() {
        let envelope: ReviewEnvelope = serde_json::from_value(json!({
            "ok": true,
            "review": { "summary": "fine" },
        }))
        .expect("envelope should deserialise");

        let review = envelope.into_review().expect("review should parse");

        assert_eq!(review.summary, "fine");
        assert!(review.potential_issues.is_empty());
        assert!(review.suggestions.is_empty());
        assert_eq!(review.score, None);
    }

    #[test]
    fn displayable_score_treats_zero_as_absent() {
        let mut review = test_support::minimal_review("fine");

        review.score = Some(0.0);
        assert_eq!(review.displayable_score(), None, "zero score is suppressed");

        review.score = Some(42.0);
        assert_eq!(review.displayable_score(), Some(42.0));

        review.score = None;
        assert_eq!(review.displayable_score(), None);
    }
}

//! Review report component rendering the outcome of a submission.
//!
//! Displays either the parsed review (summary, issues, suggestions, score)
//! or the service's error message when the request was rejected. The pane
//! scrolls; callers pass the scroll offset and visible height.

use crate::review::{PotentialIssue, ReviewData, ReviewOutcome};

use super::text_wrap::wrap_text;

/// Placeholder shown before the first submission.
const NO_REVIEW_PLACEHOLDER: &str = "(No review yet. Press Ctrl+R to request one.)";

/// Placeholder shown while a submission is in flight.
const LOADING_PLACEHOLDER: &str = "(Review in progress...)";

/// Fallback text when the service rejects a request without a message.
const UNKNOWN_ERROR_FALLBACK: &str = "Unknown error occurred.";

/// Severity label used when the service omits one.
const SEVERITY_FALLBACK: &str = "N/A";

/// Context for rendering the review report pane.
#[derive(Debug, Clone)]
pub struct ReviewReportViewContext<'a> {
    /// Outcome of the most recent submission, if one has resolved.
    pub outcome: Option<&'a ReviewOutcome>,
    /// Whether a submission is currently in flight.
    pub loading: bool,
    /// Maximum width for text wrapping.
    pub max_width: usize,
    /// Visible height in lines (0 = unlimited).
    pub max_height: usize,
    /// Number of report lines scrolled off the top.
    pub scroll: usize,
}

/// Component for displaying a review report.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReviewReportComponent;

impl ReviewReportComponent {
    /// Creates a new review report component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the visible window of the report as a string.
    #[must_use]
    pub fn view(&self, ctx: &ReviewReportViewContext<'_>) -> String {
        let full = self.render_full(ctx);

        if ctx.max_height == 0 {
            return full;
        }

        full.lines()
            .skip(ctx.scroll)
            .take(ctx.max_height)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of lines in the fully rendered report.
    ///
    /// Used by the caller to clamp its scroll offset.
    #[must_use]
    pub fn line_count(&self, ctx: &ReviewReportViewContext<'_>) -> usize {
        self.render_full(ctx).lines().count()
    }

    fn render_full(&self, ctx: &ReviewReportViewContext<'_>) -> String {
        match ctx.outcome {
            None if ctx.loading => LOADING_PLACEHOLDER.to_owned(),
            None => NO_REVIEW_PLACEHOLDER.to_owned(),
            Some(ReviewOutcome::Rejected { message }) => {
                let detail = message.as_deref().unwrap_or(UNKNOWN_ERROR_FALLBACK);
                wrap_text(&format!("Error: {detail}"), ctx.max_width)
            }
            Some(ReviewOutcome::Ready(review)) => Self::render_review(review, ctx.max_width),
        }
    }

    fn render_review(review: &ReviewData, max_width: usize) -> String {
        let mut output = String::from("Review Results\n");
        output.push_str(&"\u{2500}".repeat(max_width.min(40)));
        output.push('\n');
        output.push_str(&wrap_text(
            &format!("Summary: {}", review.summary),
            max_width,
        ));

        if !review.potential_issues.is_empty() {
            output.push_str("\n\nPotential Issues:");
            for (index, issue) in review.potential_issues.iter().enumerate() {
                output.push('\n');
                output.push_str(&Self::render_issue(index + 1, issue, max_width));
            }
        }

        if !review.suggestions.is_empty() {
            output.push_str("\n\nSuggestions:");
            for suggestion in &review.suggestions {
                output.push('\n');
                output.push_str(&wrap_text(&format!("- {suggestion}"), max_width));
            }
        }

        if let Some(score) = review.displayable_score() {
            output.push_str(&format!("\n\nOverall score: {score} / 100"));
        }

        output
    }

    fn render_issue(number: usize, issue: &PotentialIssue, max_width: usize) -> String {
        let severity = issue.severity.as_deref().unwrap_or(SEVERITY_FALLBACK);
        let mut output = wrap_text(
            &format!("{number}. {} (severity: {severity})", issue.issue),
            max_width,
        );

        output.push('\n');
        output.push_str(&wrap_text(
            &format!("   {}", issue.explanation),
            max_width,
        ));

        if let Some(fix) = issue.suggested_fix.as_deref() {
            output.push('\n');
            output.push_str(&wrap_text(&format!("   Suggested fix: {fix}"), max_width));
        }

        output
    }
}

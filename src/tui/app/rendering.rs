//! Rendering logic for the review TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::ReviewApp;
use crate::tui::components::{CodeEditorViewContext, ReviewReportViewContext};

/// Lines consumed by fixed chrome: header, language bar, separator, status.
const CHROME_HEIGHT: usize = 4;

/// Fraction of the body given to the editor pane, as a ratio.
const EDITOR_SHARE_NUMERATOR: usize = 2;
const EDITOR_SHARE_DENOMINATOR: usize = 5;

impl ReviewApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Critic - AI Code Review";
        let loading_indicator = if self.loading { " [Reviewing...]" } else { "" };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the language bar showing the current selections.
    pub(super) fn render_language_bar(&self) -> String {
        format!(
            "Language: {}  Depth: {}\n",
            self.language.label(),
            self.depth.as_str()
        )
    }

    /// Renders the code editor pane.
    pub(super) fn render_editor_pane(&self) -> String {
        let ctx = CodeEditorViewContext {
            code: self.editor.contents(),
            max_width: self.terminal_width(),
            max_height: self.editor_height(),
            focused: true,
        };
        self.code_editor.view(&ctx)
    }

    /// Renders the divider between the editor and report panes.
    pub(super) fn render_separator(&self) -> String {
        let mut line = "\u{2500}".repeat(self.terminal_width());
        line.push('\n');
        line
    }

    /// Renders the review report pane.
    pub(super) fn render_report_pane(&self) -> String {
        let ctx = self.report_context(self.report_scroll, self.report_height());
        self.review_report.view(&ctx)
    }

    /// Renders the status bar with the error notice or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error fetching review: {error}\n");
        }

        "Ctrl+R:review  Ctrl+L:language  Ctrl+U:clear  F1:help  Ctrl+Q:quit\n".to_owned()
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Editing:
  printable keys   Append to the code buffer
  Enter            New line
  Backspace        Delete the final character
  Ctrl+U           Clear the buffer

Review:
  Ctrl+R           Submit the buffer for review
  Ctrl+L           Cycle language (Python/JavaScript/C++)

Report:
  Up, Down         Scroll one line
  PgUp, PgDn       Scroll one page

Other:
  F1               Toggle this help
  Ctrl+Q, Ctrl+C   Quit

Press any key to close.
";
        help_text.to_owned()
    }

    /// Number of report lines when fully rendered, for scroll clamping.
    pub(super) fn report_line_count(&self) -> usize {
        let ctx = self.report_context(0, 0);
        self.review_report.line_count(&ctx)
    }

    /// Terminal width in columns, at least one.
    pub(super) fn terminal_width(&self) -> usize {
        usize::from(self.width).max(1)
    }

    /// Lines available to the editor pane.
    pub(super) fn editor_height(&self) -> usize {
        let body = usize::from(self.height).saturating_sub(CHROME_HEIGHT);
        let share = body
            .saturating_mul(EDITOR_SHARE_NUMERATOR)
            .checked_div(EDITOR_SHARE_DENOMINATOR)
            .unwrap_or(0);
        share.clamp(body.min(3), body.max(1))
    }

    /// Lines available to the report pane.
    pub(super) fn report_height(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(CHROME_HEIGHT)
            .saturating_sub(self.editor_height())
            .max(1)
    }

    fn report_context(&self, scroll: usize, max_height: usize) -> ReviewReportViewContext<'_> {
        ReviewReportViewContext {
            outcome: self.outcome.as_ref(),
            loading: self.loading,
            max_width: self.terminal_width(),
            max_height,
            scroll,
        }
    }
}

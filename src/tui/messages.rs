//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::review::{ReviewData, ReviewError};

/// Messages for the review TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Editing
    /// Append a printable character to the code buffer.
    CharTyped(char),
    /// Append a line break to the code buffer.
    NewlineTyped,
    /// Remove the final character of the code buffer.
    BackspaceTyped,
    /// Empty the code buffer.
    ClearCode,
    /// Advance the language selector to the next language.
    CycleLanguage,

    // Review submission
    /// Submit the current buffer for review.
    SubmitRequested,
    /// A submission resolved, successfully or not.
    SubmitResolved {
        /// Sequence number assigned when the submission was dispatched.
        seq: u64,
        /// Round-trip time of the submission in milliseconds.
        latency_ms: u64,
        /// The review, or the error that ended the submission.
        result: Result<ReviewData, ReviewError>,
    },

    // Report navigation
    /// Scroll the report pane up one line.
    ScrollUp,
    /// Scroll the report pane down one line.
    ScrollDown,
    /// Scroll the report pane up one page.
    ScrollPageUp,
    /// Scroll the report pane down one page.
    ScrollPageDown,

    // Application lifecycle
    /// Toggle the help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Whether this message edits the code buffer or language selection.
    #[must_use]
    pub const fn is_editor_message(&self) -> bool {
        matches!(
            self,
            Self::CharTyped(_)
                | Self::NewlineTyped
                | Self::BackspaceTyped
                | Self::ClearCode
                | Self::CycleLanguage
        )
    }

    /// Whether this message moves the report pane viewport.
    #[must_use]
    pub const fn is_scroll_message(&self) -> bool {
        matches!(
            self,
            Self::ScrollUp | Self::ScrollDown | Self::ScrollPageUp | Self::ScrollPageDown
        )
    }
}

//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! review TUI. It coordinates the code editor, language selection, and the
//! async review submission lifecycle.
//!
//! # Module Structure
//!
//! - `rendering`: View rendering methods for terminal output
//! - `submit_handlers`: Review submission dispatch and resolution

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::review::{Language, ReviewDepth, ReviewOutcome};

use super::components::{CodeEditorComponent, ReviewReportComponent};
use super::input::map_key_to_message;
use super::messages::AppMsg;
use super::state::CodeEditorState;
use super::storage::InitialInput;

mod rendering;
mod submit_handlers;

#[cfg(test)]
mod tests;

/// Main application model for the review TUI.
#[derive(Debug)]
pub struct ReviewApp {
    /// Code buffer under composition.
    pub(crate) editor: CodeEditorState,
    /// Language sent with submissions.
    pub(crate) language: Language,
    /// Review depth sent with submissions.
    pub(crate) depth: ReviewDepth,
    /// Whether a submission is currently in flight.
    pub(crate) loading: bool,
    /// Outcome of the most recent resolved submission.
    pub(crate) outcome: Option<ReviewOutcome>,
    /// Transport-level failure notice for the status bar, if any.
    pub(crate) error: Option<String>,
    /// Sequence number the next submission will carry.
    next_seq: u64,
    /// Sequence number of the most recent dispatch; responses carrying an
    /// older number are discarded as stale.
    latest_seq: Option<u64>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
    /// Lines scrolled off the top of the report pane.
    pub(crate) report_scroll: usize,
    /// Code editor component.
    code_editor: CodeEditorComponent,
    /// Review report component.
    review_report: ReviewReportComponent,
}

impl ReviewApp {
    /// Creates a new application from the optional initial input.
    #[must_use]
    pub fn new(input: Option<InitialInput>) -> Self {
        let (width, height) = crate::tui::get_initial_terminal_size();
        let (editor, language, depth) = input.map_or_else(
            || (CodeEditorState::default(), Language::default(), ReviewDepth::default()),
            |initial| {
                let editor = initial
                    .code
                    .map_or_else(CodeEditorState::default, CodeEditorState::with_code);
                (editor, initial.language, initial.depth)
            },
        );

        Self {
            editor,
            language,
            depth,
            loading: false,
            outcome: None,
            error: None,
            next_seq: 0,
            latest_seq: None,
            width,
            height,
            show_help: false,
            report_scroll: 0,
            code_editor: CodeEditorComponent::new(),
            review_report: ReviewReportComponent::new(),
        }
    }

    /// Creates an application with an empty editor and default selections.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(None)
    }

    /// Dispatches an application message to its handler.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_editor_message() {
            return self.handle_editor_msg(msg);
        }
        if msg.is_scroll_message() {
            return self.handle_scroll_msg(msg);
        }

        match msg {
            AppMsg::SubmitRequested => self.handle_submit_requested(),
            AppMsg::SubmitResolved {
                seq,
                latency_ms,
                result,
            } => self.handle_submit_resolved(*seq, *latency_ms, result),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                self.clamp_report_scroll();
                None
            }
            _ => None,
        }
    }

    /// Applies an editing message to the code buffer or language selector.
    fn handle_editor_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CharTyped(ch) => self.editor.push_char(*ch),
            AppMsg::NewlineTyped => self.editor.push_newline(),
            AppMsg::BackspaceTyped => self.editor.backspace(),
            AppMsg::ClearCode => self.editor.clear(),
            AppMsg::CycleLanguage => self.language = self.language.cycled(),
            _ => {}
        }
        None
    }

    /// Moves the report pane viewport.
    fn handle_scroll_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let page = self.report_height().max(1);
        let max_scroll = self.max_report_scroll();

        self.report_scroll = match msg {
            AppMsg::ScrollUp => self.report_scroll.saturating_sub(1),
            AppMsg::ScrollDown => self.report_scroll.saturating_add(1).min(max_scroll),
            AppMsg::ScrollPageUp => self.report_scroll.saturating_sub(page),
            AppMsg::ScrollPageDown => self.report_scroll.saturating_add(page).min(max_scroll),
            _ => self.report_scroll,
        };
        None
    }

    /// Clamps the report scroll after a resize or report change.
    pub(super) fn clamp_report_scroll(&mut self) {
        let max_scroll = self.max_report_scroll();
        if self.report_scroll > max_scroll {
            self.report_scroll = max_scroll;
        }
    }

    fn max_report_scroll(&self) -> usize {
        self.report_line_count()
            .saturating_sub(self.report_height())
    }
}

impl Model for ReviewApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve initial input from module-level storage
        let model = Self::new(crate::tui::get_initial_input());
        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            // Any key dismisses the help overlay
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&self.render_language_bar());

        output.push_str(&self.render_editor_pane());
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push_str(&self.render_report_pane());
        output.push('\n');

        output.push_str(&self.render_status_bar());

        output
    }
}

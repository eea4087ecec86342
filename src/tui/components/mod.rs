//! UI components for the review TUI.
//!
//! This module provides reusable UI components following the bubbletea-rs
//! Model-View pattern. Components are stateless; callers pass a view
//! context describing what to render.

mod code_editor;
mod review_report;
mod text_wrap;

pub use code_editor::{CodeEditorComponent, CodeEditorViewContext};
pub use review_report::{ReviewReportComponent, ReviewReportViewContext};
pub use text_wrap::{wrap_text, wrap_to_width};

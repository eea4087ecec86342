//! State management for the review TUI.
//!
//! This module provides the core state types backing the editor pane.

mod editor;

pub use editor::CodeEditorState;

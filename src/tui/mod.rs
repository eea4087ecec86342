//! Terminal User Interface for composing and reviewing code snippets.
//!
//! This module provides an interactive TUI for submitting code to the
//! review service using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ReviewApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Code editor state management
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, pre-program context uses a module-level storage pattern. Call
//! [`set_submit_context`] (and optionally [`set_initial_input`]) before
//! starting the program, and `ReviewApp::init()` will retrieve the data.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

mod storage;

pub use app::ReviewApp;
pub use storage::{
    InitialInput, set_initial_input, set_initial_terminal_size, set_submit_context,
    set_telemetry_sink,
};
pub(crate) use storage::{
    get_initial_input, get_initial_terminal_size, record_review_telemetry, submit_review,
};

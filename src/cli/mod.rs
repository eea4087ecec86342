//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`health_check`]: Probe the review service and exit
//! - [`one_shot`]: Submit one review non-interactively
//! - [`review_tui`]: Interactive TUI for composing and reviewing snippets

pub mod health_check;
pub mod one_shot;
pub mod review_tui;

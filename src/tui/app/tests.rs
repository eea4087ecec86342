//! Tests for the review TUI application model.

use std::sync::Arc;

use bubbletea_rs::Model;
use rstest::{fixture, rstest};

use crate::review::test_support::{minimal_issue, minimal_review};
use crate::review::{MockReviewGateway, ReviewData, ReviewError};
use crate::tui::messages::AppMsg;

use super::ReviewApp;

#[fixture]
fn app() -> ReviewApp {
    ReviewApp::empty()
}

fn type_code(app: &mut ReviewApp, code: &str) {
    for ch in code.chars() {
        app.handle_message(&AppMsg::CharTyped(ch));
    }
}

fn resolved(seq: u64, result: Result<ReviewData, ReviewError>) -> AppMsg {
    AppMsg::SubmitResolved {
        seq,
        latency_ms: 5,
        result,
    }
}

#[rstest]
fn submit_sets_loading_and_returns_command(mut app: ReviewApp) {
    type_code(&mut app, "print(1)");

    let cmd = app.handle_message(&AppMsg::SubmitRequested);

    assert!(cmd.is_some(), "submit should dispatch an async command");
    assert!(app.loading);
    assert!(app.outcome.is_none(), "previous report should be cleared");
    assert!(app.view().contains("[Reviewing...]"));
    assert!(app.view().contains("(Review in progress...)"));
}

#[rstest]
fn submit_while_loading_is_ignored(mut app: ReviewApp) {
    app.handle_message(&AppMsg::SubmitRequested);
    let second = app.handle_message(&AppMsg::SubmitRequested);

    assert!(second.is_none(), "loading flag should gate resubmission");
}

#[rstest]
fn successful_resolution_populates_the_report(mut app: ReviewApp) {
    app.handle_message(&AppMsg::SubmitRequested);

    let mut review = minimal_review("Looks clean");
    review.suggestions.push("Add tests".to_owned());
    app.handle_message(&resolved(0, Ok(review)));

    assert!(!app.loading, "resolution should clear the loading flag");
    let rendered = app.view();
    assert!(rendered.contains("Summary: Looks clean"));
    assert!(rendered.contains("- Add tests"));
    assert!(!rendered.contains("[Reviewing...]"));
}

#[rstest]
fn stale_resolution_is_discarded(mut app: ReviewApp) {
    // First submission fails in transit, user resubmits.
    app.handle_message(&AppMsg::SubmitRequested);
    app.handle_message(&resolved(
        0,
        Err(ReviewError::Network {
            message: "connection reset".to_owned(),
        }),
    ));
    app.handle_message(&AppMsg::SubmitRequested);

    // The first submission's response arrives late.
    app.handle_message(&resolved(0, Ok(minimal_review("stale"))));

    assert!(app.loading, "stale resolution must not clear the new flight");
    assert!(app.outcome.is_none(), "stale review must not render");

    // The current submission's response lands normally.
    app.handle_message(&resolved(1, Ok(minimal_review("fresh"))));

    assert!(!app.loading);
    assert!(app.view().contains("Summary: fresh"));
}

#[rstest]
fn rejection_renders_inline_with_fallback_message(mut app: ReviewApp) {
    app.handle_message(&AppMsg::SubmitRequested);
    app.handle_message(&resolved(0, Err(ReviewError::Rejected { message: None })));

    assert!(!app.loading);
    assert!(app.error.is_none(), "rejections are not transport errors");
    assert!(app.view().contains("Error: Unknown error occurred."));
}

#[rstest]
fn transport_error_surfaces_in_the_status_bar(mut app: ReviewApp) {
    app.handle_message(&AppMsg::SubmitRequested);
    app.handle_message(&resolved(
        0,
        Err(ReviewError::Network {
            message: "connection refused".to_owned(),
        }),
    ));

    assert!(!app.loading);
    assert!(app.outcome.is_none(), "transport failures leave no report");
    let rendered = app.view();
    assert!(rendered.contains("Error fetching review:"));
    assert!(rendered.contains("connection refused"));
}

#[rstest]
fn typed_characters_appear_in_the_editor_pane(mut app: ReviewApp) {
    type_code(&mut app, "def f():");
    app.handle_message(&AppMsg::NewlineTyped);
    type_code(&mut app, "    pass");

    let rendered = app.view();
    assert!(rendered.contains("def f():"));
    assert!(rendered.contains("    pass"));
}

#[rstest]
fn clear_code_empties_the_editor(mut app: ReviewApp) {
    type_code(&mut app, "print(1)");
    app.handle_message(&AppMsg::ClearCode);

    assert!(app.editor.is_empty());
}

#[rstest]
fn cycle_language_updates_the_language_bar(mut app: ReviewApp) {
    assert!(app.view().contains("Language: Python"));

    app.handle_message(&AppMsg::CycleLanguage);

    assert!(app.view().contains("Language: JavaScript"));
}

#[rstest]
fn help_overlay_consumes_the_next_key(mut app: ReviewApp) {
    app.handle_message(&AppMsg::ToggleHelp);
    assert!(app.view().contains("Keyboard Shortcuts"));

    // Any key closes the overlay instead of feeding the editor.
    let key = bubbletea_rs::event::KeyMsg {
        key: crossterm::event::KeyCode::Char('x'),
        modifiers: crossterm::event::KeyModifiers::NONE,
    };
    app.update(Box::new(key));

    assert!(!app.show_help);
    assert!(app.editor.is_empty(), "dismissal key must not edit the buffer");
}

#[rstest]
fn quit_message_returns_a_command(mut app: ReviewApp) {
    assert!(app.handle_message(&AppMsg::Quit).is_some());
}

#[rstest]
fn resize_updates_dimensions_without_panicking(mut app: ReviewApp) {
    let size = bubbletea_rs::event::WindowSizeMsg {
        width: 120,
        height: 40,
    };
    app.update(Box::new(size));

    assert!(!app.view().is_empty());
}

#[rstest]
fn scrolling_is_clamped_to_the_report_length(mut app: ReviewApp) {
    let mut review = minimal_review("Needs work");
    for index in 0..30 {
        review
            .potential_issues
            .push(minimal_issue(&format!("Issue {index}"), "detail"));
    }
    app.handle_message(&AppMsg::SubmitRequested);
    app.handle_message(&resolved(0, Ok(review)));

    for _ in 0..500 {
        app.handle_message(&AppMsg::ScrollDown);
    }
    let bottom = app.report_scroll;
    app.handle_message(&AppMsg::ScrollPageDown);
    assert_eq!(app.report_scroll, bottom, "scroll should stop at the bottom");

    for _ in 0..500 {
        app.handle_message(&AppMsg::ScrollUp);
    }
    assert_eq!(app.report_scroll, 0);
}

/// End-to-end submit flight through the module-level gateway storage.
///
/// The submit context is process-global, so this is the only unit test that
/// sets it.
#[tokio::test]
async fn submit_command_round_trips_through_the_gateway() {
    let mut review = minimal_review("Solid work");
    review.score = Some(88.0);

    let mut gateway = MockReviewGateway::new();
    let canned = review.clone();
    gateway
        .expect_submit_review()
        .returning(move |_| Ok(canned.clone()));

    assert!(crate::tui::set_submit_context(Arc::new(gateway)));

    let mut app = ReviewApp::empty();
    type_code(&mut app, "print(1)");

    let cmd = app
        .handle_message(&AppMsg::SubmitRequested)
        .expect("submit should dispatch a command");
    let message = cmd.await.expect("command should produce a message");
    let resolved_msg = message
        .downcast::<AppMsg>()
        .expect("command output should be an AppMsg");
    app.handle_message(&resolved_msg);

    assert!(!app.loading);
    let rendered = app.view();
    assert!(rendered.contains("Summary: Solid work"));
    assert!(rendered.contains("Overall score: 88 / 100"));
}

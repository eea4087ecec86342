//! Review submission handlers for the review TUI.
//!
//! This module contains the message handlers that dispatch a review request
//! to the service and fold the resolution back into application state. Each
//! dispatch carries a sequence number; a resolution whose number no longer
//! matches the latest dispatch is discarded as stale.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::review::{ReviewData, ReviewError, ReviewOutcome, ReviewRequest};
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Handles a submit request by dispatching the buffer to the service.
    ///
    /// A request already in flight suppresses new submissions; the loading
    /// flag is the single gate. Dispatching clears the previous report so
    /// the pane shows progress instead of a stale review.
    pub(super) fn handle_submit_requested(&mut self) -> Option<Cmd> {
        if self.loading {
            return None;
        }

        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.latest_seq = Some(seq);

        self.loading = true;
        self.outcome = None;
        self.error = None;
        self.report_scroll = 0;

        let request = ReviewRequest::new(
            self.editor.contents().to_owned(),
            self.language,
            self.depth,
        );

        Some(Box::pin(async move {
            let start = std::time::Instant::now();
            let result = crate::tui::submit_review(&request).await;
            #[expect(
                clippy::cast_possible_truncation,
                reason = "Latency over u64::MAX milliseconds is unrealistic"
            )]
            let latency_ms = start.elapsed().as_millis() as u64;

            Some(Box::new(AppMsg::SubmitResolved {
                seq,
                latency_ms,
                result,
            }) as Box<dyn Any + Send>)
        }))
    }

    /// Folds a resolved submission back into application state.
    ///
    /// Service rejections render inline in the report pane; transport-level
    /// failures surface as a status-bar notice instead.
    pub(super) fn handle_submit_resolved(
        &mut self,
        seq: u64,
        latency_ms: u64,
        result: &Result<ReviewData, ReviewError>,
    ) -> Option<Cmd> {
        if self.latest_seq != Some(seq) {
            tracing::debug!(seq, "discarding stale review resolution");
            return None;
        }

        self.loading = false;
        crate::tui::record_review_telemetry(latency_ms, result);

        match result {
            Ok(review) => {
                self.outcome = Some(ReviewOutcome::Ready(review.clone()));
                self.error = None;
            }
            Err(ReviewError::Rejected { message }) => {
                self.outcome = Some(ReviewOutcome::Rejected {
                    message: message.clone(),
                });
                self.error = None;
            }
            Err(error) => {
                tracing::error!(%error, "review submission failed");
                self.outcome = None;
                self.error = Some(error.to_string());
            }
        }

        None
    }
}

use crate::application::ports::Clipboard;
use crate::domain::{RefinementRequest, SubmissionId, UiState};

use super::refinement_service::{RefinementError, RefinementService};

pub const BLANK_INPUT_MESSAGE: &str = "Enter some text or upload a file to refine.";
pub const GENERIC_FAILURE_MESSAGE: &str = "An unknown error occurred while refining the text.";

/// Single writer of [`UiState`].
///
/// State only changes through `submit`, `settle_success`, `settle_failure` and
/// `toggle_diff`. Each submit supersedes the previous one: settle events that
/// carry an older [`SubmissionId`] are dropped.
#[derive(Debug, Default)]
pub struct RefinementController {
    state: UiState,
    latest: Option<SubmissionId>,
}

impl RefinementController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn latest_submission(&self) -> Option<SubmissionId> {
        self.latest
    }

    /// Enters `Loading` for `text`. Blank text is rejected and leaves the state
    /// untouched.
    pub fn submit(&mut self, text: &str) -> Result<SubmissionId, RefinementError> {
        if text.trim().is_empty() {
            return Err(RefinementError::Validation(BLANK_INPUT_MESSAGE.to_string()));
        }

        let submission = self
            .latest
            .map(|id| id.next())
            .unwrap_or(SubmissionId::from_u64(1));
        self.latest = Some(submission);

        self.state.original_text = text.to_string();
        self.state.refined_text.clear();
        self.state.error = None;
        self.state.show_diff = false;
        self.state.is_loading = true;

        tracing::debug!(submission = %submission, "Refinement submitted");
        Ok(submission)
    }

    pub fn settle_success(&mut self, submission: SubmissionId, refined_text: String) -> bool {
        if !self.accepts(submission) {
            return false;
        }

        self.state.is_loading = false;
        self.state.refined_text = refined_text;
        self.state.show_diff = false;
        true
    }

    pub fn settle_failure(&mut self, submission: SubmissionId, error: &RefinementError) -> bool {
        if !self.accepts(submission) {
            return false;
        }

        self.state.is_loading = false;
        self.state.error = Some(failure_message(error));
        true
    }

    pub fn settle(
        &mut self,
        submission: SubmissionId,
        outcome: Result<String, RefinementError>,
    ) -> bool {
        match outcome {
            Ok(refined_text) => self.settle_success(submission, refined_text),
            Err(error) => self.settle_failure(submission, &error),
        }
    }

    /// Flips the diff view. Returns `false` (and changes nothing) while there is
    /// no text to compare.
    pub fn toggle_diff(&mut self) -> bool {
        if !self.state.has_text() {
            return false;
        }
        self.state.show_diff = !self.state.show_diff;
        true
    }

    /// Submit, await the service and settle in one go.
    pub async fn refine(
        &mut self,
        service: &RefinementService,
        request: &RefinementRequest,
    ) -> Result<&UiState, RefinementError> {
        let submission = self.submit(&request.original_text)?;
        let outcome = service.refine(request).await;
        self.settle(submission, outcome);
        Ok(&self.state)
    }

    /// Copies the refined text. Failures are logged, never propagated.
    pub fn copy_refined_text(&self, clipboard: &dyn Clipboard) -> bool {
        if self.state.refined_text.is_empty() {
            return false;
        }

        match clipboard.copy(&self.state.refined_text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to copy refined text to clipboard");
                false
            }
        }
    }

    fn accepts(&self, submission: SubmissionId) -> bool {
        let current = self.latest == Some(submission) && self.state.is_loading;
        if !current {
            tracing::debug!(
                submission = %submission,
                latest = ?self.latest.map(|id| id.as_u64()),
                "Ignoring stale refinement result"
            );
        }
        current
    }
}

fn failure_message(error: &RefinementError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}

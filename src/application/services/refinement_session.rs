use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::application::ports::LlmClientError;
use crate::domain::{RefinementRequest, SubmissionId, UiState};

use super::refinement_controller::RefinementController;
use super::refinement_service::{RefinementError, RefinementService};

pub const INTERRUPTED_MESSAGE: &str = "The refinement was interrupted before it finished.";

/// Shared refinement screen backing the HTTP session endpoints.
///
/// The controller lock is never held while the model is being called.
pub struct RefinementSession {
    controller: Arc<Mutex<RefinementController>>,
    service: Arc<RefinementService>,
}

pub struct SubmitReceipt {
    pub submission: SubmissionId,
    pub state: UiState,
    /// Resolves to whether the result was applied to the session.
    pub task: JoinHandle<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("a refinement is already in progress")]
    Busy,
    #[error(transparent)]
    Refinement(#[from] RefinementError),
}

impl RefinementSession {
    pub fn new(service: Arc<RefinementService>) -> Self {
        Self {
            controller: Arc::new(Mutex::new(RefinementController::new())),
            service,
        }
    }

    pub async fn snapshot(&self) -> UiState {
        self.controller.lock().await.state().clone()
    }

    pub async fn submit(&self, request: RefinementRequest) -> Result<SubmitReceipt, SessionError> {
        let (submission, state) = {
            let mut controller = self.controller.lock().await;
            if controller.state().is_loading {
                return Err(SessionError::Busy);
            }
            let submission = controller.submit(&request.original_text)?;
            (submission, controller.state().clone())
        };

        let mut pending = PendingSettle {
            controller: Arc::clone(&self.controller),
            submission,
            settled: false,
        };
        let service = Arc::clone(&self.service);
        let task = tokio::spawn(async move {
            let outcome = service.refine(&request).await;
            let applied = pending.controller.lock().await.settle(submission, outcome);
            pending.settled = true;
            applied
        });

        Ok(SubmitReceipt {
            submission,
            state,
            task,
        })
    }

    /// `None` when there is no text to diff yet.
    pub async fn toggle_diff(&self) -> Option<UiState> {
        let mut controller = self.controller.lock().await;
        if controller.toggle_diff() {
            Some(controller.state().clone())
        } else {
            None
        }
    }
}

/// Fails the submission if its task is dropped before settling (panic or abort),
/// so the session does not stay `Loading` forever.
struct PendingSettle {
    controller: Arc<Mutex<RefinementController>>,
    submission: SubmissionId,
    settled: bool,
}

impl Drop for PendingSettle {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };

        let controller = Arc::clone(&self.controller);
        let submission = self.submission;
        tracing::warn!(submission = %submission, "Refinement task ended without a result");
        runtime.spawn(async move {
            let error = RefinementError::Service(LlmClientError::ApiRequestFailed(
                INTERRUPTED_MESSAGE.to_string(),
            ));
            controller.lock().await.settle_failure(submission, &error);
        });
    }
}

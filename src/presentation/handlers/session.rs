use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::error::{error_response, session_status};
use super::refine::{RefineBody, parse_body};
use crate::application::ports::DiffRenderer;
use crate::domain::{DiffSegment, UiState};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub state: UiState,
    pub phase: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<u64>,
    /// Present only while the diff view is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<Vec<DiffSegment>>,
}

impl SessionView {
    fn new(state: UiState, diff_renderer: &dyn DiffRenderer) -> Self {
        let diff = (state.show_diff && state.has_text())
            .then(|| diff_renderer.diff(&state.original_text, &state.refined_text));
        Self {
            phase: state.phase().as_str(),
            submission: None,
            diff,
            state,
        }
    }
}

pub async fn session_state_handler(State(state): State<AppState>) -> Json<SessionView> {
    let snapshot = state.session.snapshot().await;
    Json(SessionView::new(snapshot, state.diff_renderer.as_ref()))
}

/// Starts a refinement in the background and answers straight away with the
/// loading state. Poll `GET /api/v1/session` for the outcome.
#[tracing::instrument(skip(state, payload))]
pub async fn session_refine_handler(
    State(state): State<AppState>,
    payload: Result<Json<RefineBody>, JsonRejection>,
) -> Response {
    let request = match parse_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.session.submit(request).await {
        Ok(receipt) => {
            tracing::info!(submission = %receipt.submission, "Refinement submitted");
            let mut view = SessionView::new(receipt.state, state.diff_renderer.as_ref());
            view.submission = Some(receipt.submission.as_u64());
            (StatusCode::ACCEPTED, Json(view)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Refinement submission rejected");
            error_response(session_status(&e), e.to_string())
        }
    }
}

pub async fn toggle_diff_handler(State(state): State<AppState>) -> Response {
    match state.session.toggle_diff().await {
        Some(snapshot) => {
            Json(SessionView::new(snapshot, state.diff_renderer.as_ref())).into_response()
        }
        None => error_response(StatusCode::CONFLICT, "There is no text to compare yet"),
    }
}

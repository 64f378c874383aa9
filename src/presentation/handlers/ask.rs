use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::error::error_response;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub response: String,
}

/// Raw prompt relay: the body is forwarded to the configured model as-is and
/// the answer is returned without normalization.
#[tracing::instrument(skip(state, payload))]
pub async fn ask_handler(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Malformed ask request");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    if request.prompt.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Prompt is required");
    }

    tracing::debug!(prompt = %sanitize_prompt(&request.prompt), "Relaying prompt");

    match state.llm_client.complete(&request.prompt).await {
        Ok(response) => {
            tracing::debug!(response = %sanitize_prompt(&response), "Prompt answered");
            (StatusCode::OK, Json(AskResponse { response })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Prompt relay failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::error::{error_response, refinement_status};
use crate::application::services::{BLANK_INPUT_MESSAGE, RefinementError};
use crate::domain::{RefinementParams, RefinementRequest};
use crate::presentation::state::AppState;

/// Body shared by the stateless and the session refine endpoints. Parameters
/// sit next to the text and fall back to their defaults when omitted.
#[derive(Debug, Deserialize)]
pub struct RefineBody {
    pub text: String,
    #[serde(flatten)]
    pub params: RefinementParams,
    #[serde(default)]
    pub suggestions: Option<String>,
}

impl From<RefineBody> for RefinementRequest {
    fn from(body: RefineBody) -> Self {
        RefinementRequest {
            original_text: body.text,
            params: body.params,
            suggestions: body.suggestions,
        }
    }
}

#[derive(Serialize)]
pub struct RefineResponse {
    pub refined_text: String,
}

pub(super) fn parse_body(
    payload: Result<Json<RefineBody>, JsonRejection>,
) -> Result<RefinementRequest, Response> {
    match payload {
        Ok(Json(body)) => Ok(body.into()),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Malformed refine request");
            Err(error_response(StatusCode::BAD_REQUEST, rejection.body_text()))
        }
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn refine_handler(
    State(state): State<AppState>,
    payload: Result<Json<RefineBody>, JsonRejection>,
) -> Response {
    let request = match parse_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    if request.is_blank() {
        let error = RefinementError::Validation(BLANK_INPUT_MESSAGE.to_string());
        return error_response(refinement_status(&error), error.to_string());
    }

    match state.refinement_service.refine(&request).await {
        Ok(refined_text) => (StatusCode::OK, Json(RefineResponse { refined_text })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Refinement failed");
            error_response(refinement_status(&e), e.to_string())
        }
    }
}

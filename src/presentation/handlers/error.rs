use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{RefinementError, SessionError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn refinement_status(error: &RefinementError) -> StatusCode {
    match error {
        RefinementError::Validation(_) => StatusCode::BAD_REQUEST,
        RefinementError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        RefinementError::Service(_) => StatusCode::BAD_GATEWAY,
    }
}

pub fn session_status(error: &SessionError) -> StatusCode {
    match error {
        SessionError::Busy => StatusCode::CONFLICT,
        SessionError::Refinement(e) => refinement_status(e),
    }
}

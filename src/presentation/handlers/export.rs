use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::error::error_response;
use crate::domain::ExportFormat;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ExportRequest {
    pub text: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default = "default_format")]
    pub format: ExportFormat,
}

fn default_format() -> ExportFormat {
    ExportFormat::Txt
}

#[tracing::instrument(skip(state, payload))]
pub async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Malformed export request");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let stem = request
        .filename
        .as_deref()
        .unwrap_or(&state.settings.export.filename_stem);

    match state.export_service.export(&request.text, stem, request.format) {
        Ok(Some(artifact)) => {
            let disposition = format!("attachment; filename=\"{}\"", artifact.filename);
            let Ok(disposition) = HeaderValue::from_str(&disposition) else {
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Invalid file name");
            };
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, HeaderValue::from_static(artifact.format.mime())),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                artifact.bytes,
            )
                .into_response()
        }
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Export failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::error::error_response;
use crate::application::ports::FileLoaderError;
use crate::domain::{ContentType, Document};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ExtractResponse {
    pub filename: String,
    pub content_type: &'static str,
    pub text: String,
}

/// Reads the first file part of a multipart upload and returns its text.
#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.file_name().is_some() => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Extract request with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(e.status(), format!("Failed to read multipart: {}", e));
            }
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let mime = field.content_type().map(str::to_string);

    tracing::debug!(filename = %filename, content_type = ?mime, "Processing file upload");

    let Some(content_type) = ContentType::detect(mime.as_deref(), &filename) else {
        let error = FileLoaderError::UnsupportedContentType(
            mime.unwrap_or_else(|| filename.clone()),
        );
        tracing::warn!(error = %error, "Unsupported upload");
        return error_response(StatusCode::UNSUPPORTED_MEDIA_TYPE, error.to_string());
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(e.status(), format!("Failed to read file: {}", e));
        }
    };

    let max_bytes = state.settings.extraction.max_file_size_bytes();
    if data.len() > max_bytes {
        tracing::warn!(bytes = data.len(), max_bytes, "Upload too large");
        return error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "File exceeds the {} MB limit",
                state.settings.extraction.max_file_size_mb
            ),
        );
    }

    let document = Document::new(filename.clone(), content_type, data.len() as u64);

    match state.file_loader.extract_text(&data, &document).await {
        Ok(text) => {
            tracing::info!(
                filename = %filename,
                chars = text.chars().count(),
                "Text extracted"
            );
            (
                StatusCode::OK,
                Json(ExtractResponse {
                    filename,
                    content_type: content_type.as_mime(),
                    text,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "Extraction failed");
            let status = match e {
                FileLoaderError::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                FileLoaderError::ExtractionFailed(_) | FileLoaderError::NoTextFound(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            };
            error_response(status, e.to_string())
        }
    }
}

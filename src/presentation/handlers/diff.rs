use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::domain::DiffSegment;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct DiffRequest {
    pub original: String,
    pub refined: String,
}

#[derive(Serialize)]
pub struct DiffResponse {
    pub segments: Vec<DiffSegment>,
}

pub async fn diff_handler(
    State(state): State<AppState>,
    Json(request): Json<DiffRequest>,
) -> Json<DiffResponse> {
    Json(DiffResponse {
        segments: state
            .diff_renderer
            .diff(&request.original, &request.refined),
    })
}

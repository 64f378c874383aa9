use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    ask_handler, diff_handler, export_handler, extract_handler, health_handler, options_handler,
    refine_handler, session_refine_handler, session_state_handler, toggle_diff_handler,
};
use crate::presentation::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = state
        .settings
        .extraction
        .max_file_size_bytes()
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health_handler))
        .route("/ask", post(ask_handler))
        .route("/api/v1/options", get(options_handler))
        .route("/api/v1/refine", post(refine_handler))
        .route("/api/v1/session", get(session_state_handler))
        .route("/api/v1/session/refine", post(session_refine_handler))
        .route("/api/v1/session/diff/toggle", post(toggle_diff_handler))
        .route("/api/v1/diff", post(diff_handler))
        .route(
            "/api/v1/extract",
            post(extract_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/export", post(export_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

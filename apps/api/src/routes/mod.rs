pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::errors::AppError;
use crate::interview::handlers as interview;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Room for multipart headers on top of the file itself, so the size check on
/// the decoded file part decides what is too large. Bodies past this are cut
/// off while buffering and reported by `UploadBody` with the same envelope.
const MULTIPART_ALLOWANCE: usize = 1024 * 1024;

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Any origin, the methods we serve, and `Content-Type`. Every OPTIONS request
/// is answered here with 200 and these headers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_ALLOWANCE;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/generate-questions",
            post(interview::handle_generate_questions),
        )
        .route("/evaluate-answers", post(interview::handle_evaluate_answers))
        .route(
            "/parse-resume",
            post(resume::handle_parse_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer())
}

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports service version and whether a model credential is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Interview assistant API is ready",
        "apiKeyConfigured": state.config.api_key_configured(),
        "version": env!("CARGO_PKG_VERSION"),
        "runtime": "rust"
    }))
}

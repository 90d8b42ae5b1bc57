use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production; swapped for a stub in tests.
    pub llm: Arc<dyn TextModel>,
    pub config: Config,
}

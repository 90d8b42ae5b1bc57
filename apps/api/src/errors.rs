use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::resume::document::DocumentError;
use crate::resume::multipart::MultipartError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Clients only rely on the stable `code`; library text is confined to `details`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("LLM error: {context}: {source}")]
    Llm {
        context: &'static str,
        #[source]
        source: LlmError,
    },

    #[error("Not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wraps a model failure with the operation it interrupted.
    pub fn llm(context: &'static str) -> impl FnOnce(LlmError) -> AppError {
        move |source| AppError::Llm { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Multipart(_) | AppError::Document(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Llm { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Multipart(_) => "MULTIPART_ERROR",
            AppError::Document(e) => e.code(),
            AppError::Llm { .. } => "LLM_ERROR",
            AppError::NotFound => "NOT_FOUND",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Human-readable message and optional diagnostic detail.
    fn message_and_details(&self) -> (String, Option<String>) {
        match self {
            AppError::Validation(msg) => (msg.clone(), None),
            AppError::Multipart(e) => (e.to_string(), None),
            AppError::Document(e) => (e.message(), e.details()),
            AppError::Llm { context, source } => (context.to_string(), Some(source.to_string())),
            AppError::NotFound => ("Route not found".to_string(), None),
            AppError::Internal(e) => (
                "An internal server error occurred".to_string(),
                Some(e.to_string()),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!("{self}");
        }

        let (message, details) = self.message_and_details();
        let mut body = json!({
            "success": false,
            "error": message,
            "code": self.code(),
        });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_is_400_without_details() {
        let (status, body) =
            body_json(AppError::Validation("Answers and questions are required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"], "Answers and questions are required");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_llm_error_is_500_with_details() {
        let err = AppError::llm("Question generation failed")(LlmError::EmptyContent);
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "LLM_ERROR");
        assert_eq!(body["error"], "Question generation failed");
        assert_eq!(body["details"], "LLM returned empty content");
    }

    #[tokio::test]
    async fn test_document_error_uses_its_own_code() {
        let (status, body) = body_json(DocumentError::UnsupportedFormat.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNSUPPORTED_FORMAT");
    }
}

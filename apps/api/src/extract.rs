//! Body extractors that report failures through `AppError`.

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::{header::CONTENT_LENGTH, StatusCode};
use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::resume::document::DocumentError;
use crate::state::AppState;

/// Like `axum::Json`, but:
/// - an empty body deserializes as `{}` so all-optional requests work without one,
/// - the `Content-Type` header is not enforced,
/// - malformed JSON becomes a `VALIDATION_ERROR` envelope instead of a plain-text 4xx.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(format!("Could not read request body: {e}")))?;

        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        serde_json::from_slice(body)
            .map(ApiJson)
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))
    }
}

/// Raw upload body. A body over the route's `DefaultBodyLimit` becomes a
/// `FILE_TOO_LARGE` envelope rather than axum's plain-text 413.
#[derive(Debug)]
pub struct UploadBody(pub Bytes);

#[async_trait]
impl FromRequest<AppState> for UploadBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let declared = req
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok());

        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(UploadBody(bytes)),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(DocumentError::FileTooLarge {
                    size: declared,
                    limit: state.config.max_upload_bytes,
                }
                .into())
            }
            Err(e) => Err(AppError::Validation(format!(
                "Could not read request body: {e}"
            ))),
        }
    }
}

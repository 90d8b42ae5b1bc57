//! Axum route handler for resume uploads.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::UploadBody;
use crate::resume::contact::{extract_contact_info, ContactInfo};
use crate::resume::document::{ensure_min_length, extract_text_blocking, DocumentError};
use crate::resume::multipart::{boundary_from_content_type, decode_first_file, is_multipart, FilePart};
use crate::state::AppState;

/// Characters of extracted text echoed back to the client.
const PREVIEW_CHARS: usize = 500;
const DEFAULT_FILENAME: &str = "uploaded_resume";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeResponse {
    pub success: bool,
    pub filename: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub extracted_text: String,
}

/// POST /parse-resume
///
/// Accepts either `multipart/form-data` (first file part wins) or the raw file
/// bytes / plain text as the request body.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    headers: HeaderMap,
    UploadBody(body): UploadBody,
) -> Result<Json<ParseResumeResponse>, AppError> {
    if body.is_empty() {
        return Err(AppError::Validation("No file data provided".to_string()));
    }

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let file = if is_multipart(content_type) {
        let boundary = boundary_from_content_type(content_type)?;
        decode_first_file(&body, &boundary)?
    } else {
        FilePart {
            filename: None,
            content_type: Some(content_type.to_string()).filter(|c| !c.is_empty()),
            data: body.to_vec(),
        }
    };

    let limit = state.config.max_upload_bytes;
    if file.data.len() > limit {
        return Err(DocumentError::FileTooLarge {
            size: Some(file.data.len()),
            limit,
        }
        .into());
    }

    let filename = file
        .filename
        .clone()
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
    info!(
        "Parsing resume '{filename}' ({} bytes, content-type {:?})",
        file.data.len(),
        file.content_type
    );

    let text = extract_text_blocking(file.data).await?;
    ensure_min_length(&text)?;

    let contact = extract_contact_info(state.llm.as_ref(), &text).await;

    Ok(Json(ParseResumeResponse {
        success: true,
        filename,
        contact,
        extracted_text: preview(&text, PREVIEW_CHARS),
    }))
}

/// First `max_chars` characters, with `...` appended when truncated.
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

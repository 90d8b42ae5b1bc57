//! Multipart Decoder: pulls the first uploaded file out of a `multipart/form-data` body.
//!
//! Deliberately minimal: one file, no charset handling, and a boundary string
//! that happens to occur inside the file payload will cut it short.

use thiserror::Error;

const HEADER_SEPARATOR: &[u8] = b"\r\n\r\n";
const CRLF: &[u8] = b"\r\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MultipartError {
    #[error("No boundary found in multipart content type")]
    MissingBoundary,

    #[error("No file found in form data")]
    NoFilePart,
}

/// The first file part of a form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

pub fn is_multipart(content_type: &str) -> bool {
    content_type
        .to_ascii_lowercase()
        .starts_with("multipart/form-data")
}

/// Extracts the boundary token from a `Content-Type` header value.
pub fn boundary_from_content_type(content_type: &str) -> Result<String, MultipartError> {
    let lower = content_type.to_ascii_lowercase();
    let start = lower
        .find("boundary=")
        .ok_or(MultipartError::MissingBoundary)?
        + "boundary=".len();

    let raw = content_type[start..]
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches('"');

    if raw.is_empty() {
        return Err(MultipartError::MissingBoundary);
    }
    Ok(raw.to_string())
}

/// Returns the first part whose headers carry a `filename`.
pub fn decode_first_file(body: &[u8], boundary: &str) -> Result<FilePart, MultipartError> {
    let delimiter = format!("--{boundary}");

    for segment in split_on(body, delimiter.as_bytes()) {
        let Some(header_end) = find(segment, HEADER_SEPARATOR) else {
            continue;
        };
        let headers = String::from_utf8_lossy(&segment[..header_end]);
        if !headers.contains("filename=") {
            continue;
        }

        let mut data = &segment[header_end + HEADER_SEPARATOR.len()..];
        if let Some(stripped) = data.strip_suffix(CRLF) {
            data = stripped;
        }

        return Ok(FilePart {
            filename: header_param(&headers, "filename"),
            content_type: header_value(&headers, "content-type"),
            data: data.to_vec(),
        });
    }

    Err(MultipartError::NoFilePart)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn split_on<'a>(mut body: &'a [u8], delimiter: &[u8]) -> Vec<&'a [u8]> {
    let mut segments = Vec::new();
    while let Some(pos) = find(body, delimiter) {
        segments.push(&body[..pos]);
        body = &body[pos + delimiter.len()..];
    }
    segments.push(body);
    segments
}

/// Reads `name="value"` (or unquoted) from a part's header block.
fn header_param(headers: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=");
    headers.lines().find_map(|line| {
        let start = line.find(&needle)? + needle.len();
        let rest = &line[start..];
        let value = match rest.strip_prefix('"') {
            Some(quoted) => quoted.split('"').next()?,
            None => rest.split(';').next()?.trim(),
        };
        (!value.is_empty()).then(|| value.to_string())
    })
}

fn header_value(headers: &str, name: &str) -> Option<String> {
    headers.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim()
            .eq_ignore_ascii_case(name)
            .then(|| value.trim().to_string())
    })
}

#[cfg(test)]
pub(crate) fn encode_single_file(
    boundary: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"note\"\r\n\r\nplease review\r\n",
    );
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

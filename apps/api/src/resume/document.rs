//! Document Text Extractor: sniffs the file format from its magic bytes and
//! turns PDF, DOCX or plain-text uploads into newline-separated text.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::debug;

/// Resumes shorter than this (after trimming) are rejected before contact extraction.
pub const MIN_TEXT_CHARS: usize = 10;

const DOCX_BODY_PATH: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file format. Please upload PDF, DOCX, or TXT files.")]
    UnsupportedFormat,

    #[error("Failed to extract text from {kind}: {reason}")]
    Extraction { kind: DocumentKind, reason: String },

    #[error("No text could be extracted from the {0}")]
    EmptyDocument(DocumentKind),

    #[error("Resume content too short - please provide a complete resume")]
    ContentTooShort { chars: usize },

    #[error("File size must be less than {}", format_size(.limit))]
    FileTooLarge { size: Option<usize>, limit: usize },
}

impl DocumentError {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentError::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            DocumentError::Extraction { .. } | DocumentError::EmptyDocument(_) => "EXTRACTION_ERROR",
            DocumentError::ContentTooShort { .. } => "CONTENT_TOO_SHORT",
            DocumentError::FileTooLarge { .. } => "FILE_TOO_LARGE",
        }
    }

    /// Public message, free of parser-library text.
    pub fn message(&self) -> String {
        match self {
            DocumentError::Extraction { kind, .. } => format!("Could not read the {kind} file"),
            other => other.to_string(),
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            DocumentError::Extraction { reason, .. } => Some(reason.clone()),
            DocumentError::ContentTooShort { chars } => {
                Some(format!("{chars} characters, minimum is {MIN_TEXT_CHARS}"))
            }
            DocumentError::FileTooLarge { size, .. } => {
                size.map(|size| format!("received {size} bytes"))
            }
            _ => None,
        }
    }
}

fn format_size(bytes: &usize) -> String {
    const MIB: usize = 1024 * 1024;
    if *bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
            DocumentKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// `%PDF` → PDF, `PK` (ZIP container) → DOCX, anything else is treated as text.
pub fn sniff(bytes: &[u8]) -> DocumentKind {
    if bytes.starts_with(b"%PDF") {
        DocumentKind::Pdf
    } else if bytes.starts_with(b"PK") {
        DocumentKind::Docx
    } else {
        DocumentKind::Text
    }
}

/// Extracts plain text on the blocking pool. Parser panics surface as extraction errors.
pub async fn extract_text_blocking(bytes: Vec<u8>) -> Result<String, DocumentError> {
    let kind = sniff(&bytes);
    run_parser(kind, move || extract_text(&bytes)).await
}

async fn run_parser<F>(kind: DocumentKind, parse: F) -> Result<String, DocumentError>
where
    F: FnOnce() -> Result<String, DocumentError> + Send + 'static,
{
    tokio::task::spawn_blocking(parse)
        .await
        .map_err(|e| DocumentError::Extraction {
            kind,
            reason: format!("parser aborted: {e}"),
        })?
}

/// Dispatches on the magic prefix and returns one page/paragraph per line.
pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let kind = sniff(bytes);
    debug!("Extracting text from {} bytes as {kind}", bytes.len());

    let text = match kind {
        DocumentKind::Pdf => extract_pdf(bytes)?,
        DocumentKind::Docx => extract_docx(bytes)?,
        DocumentKind::Text => {
            return std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|_| DocumentError::UnsupportedFormat);
        }
    };

    if text.trim().is_empty() {
        return Err(DocumentError::EmptyDocument(kind));
    }
    Ok(text)
}

/// Rejects text that is too short to be a resume.
pub fn ensure_min_length(text: &str) -> Result<(), DocumentError> {
    let chars = text.trim().chars().count();
    if chars < MIN_TEXT_CHARS {
        return Err(DocumentError::ContentTooShort { chars });
    }
    Ok(())
}

fn extract_pdf(bytes: &[u8]) -> Result<String, DocumentError> {
    let raw = pdf_extract::extract_text_from_mem(bytes).map_err(|e| DocumentError::Extraction {
        kind: DocumentKind::Pdf,
        reason: e.to_string(),
    })?;

    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    Ok(lines.join("\n"))
}

fn extract_docx(bytes: &[u8]) -> Result<String, DocumentError> {
    let docx_error = |reason: String| DocumentError::Extraction {
        kind: DocumentKind::Docx,
        reason,
    };

    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| docx_error(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PATH)
        .map_err(|e| docx_error(format!("{DOCX_BODY_PATH}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| docx_error(e.to_string()))?;

    docx_paragraphs(&xml).map_err(|e| docx_error(e.to_string()))
}

/// Walks WordprocessingML and emits the text runs of each `<w:p>` as one line.
fn docx_paragraphs(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) if e.name().as_ref() == b"w:t" => in_text_run = false,
            Event::Text(e) if in_text_run => current.push_str(&e.unescape()?),
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                b"w:p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(std::mem::take(&mut current));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    Ok(paragraphs.join("\n").trim().to_string())
}

#[cfg(test)]
pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("[Content_Types].xml", zip::write::FileOptions::default())
        .unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer
        .start_file(DOCX_BODY_PATH, zip::write::FileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

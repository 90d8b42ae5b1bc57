//! Contact-Field Extractor: name, email and phone from resume text.
//!
//! Primary path: one model query per field. If any query fails outright the
//! whole record is rebuilt from regexes instead. Never returns an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::{LlmError, TextModel};
use crate::resume::prompts::{email_prompt, name_prompt, phone_prompt};

/// Two or more capitalised words at the start of a line.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z][A-Za-z'-]*[a-z](?:[ \t]+[A-Z][A-Za-z'-]*[a-z])+)\b")
        .expect("name regex is valid")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)*\.[A-Za-z]{2,}").expect("email regex is valid")
});

/// North-American number, optional `+1` prefix.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("phone regex is valid")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Which path produced a `ContactInfo`. Logged, not returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    Model,
    Regex,
}

pub async fn extract_contact_info(model: &dyn TextModel, text: &str) -> ContactInfo {
    extract_contact_info_with_source(model, text).await.0
}

pub async fn extract_contact_info_with_source(
    model: &dyn TextModel,
    text: &str,
) -> (ContactInfo, ExtractionSource) {
    match extract_with_model(model, text).await {
        Ok(contact) => {
            info!(
                "Extracted contact info via model: name={}, email={}, phone={}",
                contact.name.is_some(),
                contact.email.is_some(),
                contact.phone.is_some()
            );
            (contact, ExtractionSource::Model)
        }
        Err(e) => {
            warn!("Model contact extraction failed, falling back to regex: {e}");
            (extract_contact_info_regex(text), ExtractionSource::Regex)
        }
    }
}

async fn extract_with_model(model: &dyn TextModel, text: &str) -> Result<ContactInfo, LlmError> {
    let queries = [name_prompt(text), email_prompt(text), phone_prompt(text)];

    let (name, email, phone) = tokio::try_join!(
        model.generate(&queries[0]),
        model.generate(&queries[1]),
        model.generate(&queries[2]),
    )?;

    Ok(ContactInfo {
        name: non_empty(&name),
        email: non_empty(&email).filter(|e| e.contains('@')),
        phone: non_empty(&phone).filter(|p| p.chars().any(|c| c.is_ascii_digit())),
    })
}

/// Regex-only extraction. Each field matches independently; no match means `None`.
pub fn extract_contact_info_regex(text: &str) -> ContactInfo {
    ContactInfo {
        name: NAME_RE
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string()),
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().trim().to_string()),
    }
}

/// Trims model output and drops surrounding quotes or backticks.
fn non_empty(raw: &str) -> Option<String> {
    let value = raw.trim().trim_matches(|c| c == '`' || c == '"').trim();
    (!value.is_empty()).then(|| value.to_string())
}

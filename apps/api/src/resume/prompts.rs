// Contact-extraction prompt templates.
// One short instruction per field; the full resume text is appended verbatim.

use crate::llm_client::prompts::SINGLE_VALUE_INSTRUCTION;

pub const NAME_PROMPT_TEMPLATE: &str =
    "Extract the full name of the candidate from this resume text. Only return the name.";

pub const EMAIL_PROMPT_TEMPLATE: &str =
    "Extract the email address from this resume text. Only return the email.";

pub const PHONE_PROMPT_TEMPLATE: &str =
    "Extract the phone number from this resume text. Only return the phone number.";

fn with_resume(instruction: &str, text: &str) -> String {
    format!("{instruction} {SINGLE_VALUE_INSTRUCTION}\n\nRESUME TEXT:\n{text}")
}

pub fn name_prompt(text: &str) -> String {
    with_resume(NAME_PROMPT_TEMPLATE, text)
}

pub fn email_prompt(text: &str) -> String {
    with_resume(EMAIL_PROMPT_TEMPLATE, text)
}

pub fn phone_prompt(text: &str) -> String {
    with_resume(PHONE_PROMPT_TEMPLATE, text)
}

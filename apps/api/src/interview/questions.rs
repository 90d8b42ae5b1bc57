//! Question generation: one prompt, one model call, shape-checked reply.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{info, warn};

use crate::interview::models::{Difficulty, InterviewQuestion, QuestionRequest};
use crate::interview::prompts::{build_question_prompt, QUESTION_COUNT};
use crate::llm_client::{generate_json, LlmError, TextModel};

pub async fn generate_questions(
    model: &dyn TextModel,
    request: &QuestionRequest,
) -> Result<Vec<Value>, LlmError> {
    let prompt = build_question_prompt(request);
    let raw: Value = generate_json(model, &prompt).await?;
    let questions = validate_questions(raw)?;

    if !has_balanced_mix(&questions) {
        warn!(
            "Model returned an unbalanced difficulty mix for role '{}': {:?}",
            request.role,
            questions
                .iter()
                .map(|q| q["difficulty"].to_string())
                .collect::<Vec<_>>()
        );
    }

    info!(
        "Generated {} questions for role '{}' ({})",
        questions.len(),
        request.role,
        request.experience
    );
    Ok(questions)
}

/// Container and count check: a JSON array of exactly six objects. Field
/// contents are passed through as the model wrote them.
pub fn validate_questions(raw: Value) -> Result<Vec<Value>, LlmError> {
    let Value::Array(items) = raw else {
        return Err(LlmError::Shape(
            "expected a JSON array of questions".to_string(),
        ));
    };

    if items.len() != QUESTION_COUNT {
        return Err(LlmError::Shape(format!(
            "expected {QUESTION_COUNT} questions, got {}",
            items.len()
        )));
    }

    if let Some(index) = items.iter().position(|q| !q.is_object()) {
        return Err(LlmError::Shape(format!(
            "question {index} is not a JSON object"
        )));
    }

    Ok(items)
}

/// True when every question reads as an `InterviewQuestion` with its canonical
/// time limit and every difficulty appears twice.
pub fn has_balanced_mix(questions: &[Value]) -> bool {
    let mut counts: HashMap<Difficulty, usize> = HashMap::new();
    for raw in questions {
        let Ok(q) = serde_json::from_value::<InterviewQuestion>(raw.clone()) else {
            return false;
        };
        if q.time_limit != q.difficulty.time_limit_secs() {
            return false;
        }
        *counts.entry(q.difficulty).or_default() += 1;
    }
    Difficulty::ALL
        .iter()
        .all(|d| counts.get(d).copied().unwrap_or(0) == QUESTION_COUNT / Difficulty::ALL.len())
}

#[cfg(test)]
pub(crate) fn compliant_reply() -> String {
    let questions: Vec<Value> = Difficulty::ALL
        .iter()
        .flat_map(|d| [*d, *d])
        .enumerate()
        .map(|(i, d)| {
            serde_json::json!({
                "question": format!("Question {}", i + 1),
                "difficulty": d.to_string(),
                "timeLimit": d.time_limit_secs(),
                "category": "React"
            })
        })
        .collect();
    format!(
        "```json\n{}\n```",
        serde_json::to_string_pretty(&questions).unwrap()
    )
}

//! Axum route handlers for the interview endpoints.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::interview::evaluation::{evaluate_answers, validate_request};
use crate::interview::models::{EvaluationRequest, EvaluationResult, QuestionRequest};
use crate::interview::questions::generate_questions;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsResponse {
    pub success: bool,
    pub questions: Vec<serde_json::Value>,
    pub total_questions: usize,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateAnswersResponse {
    pub success: bool,
    pub evaluation: EvaluationResult,
    pub evaluated_at: DateTime<Utc>,
}

/// POST /generate-questions
///
/// Every field is optional; an empty body asks for the default Full Stack interview.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuestionRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let questions = generate_questions(state.llm.as_ref(), &request)
        .await
        .map_err(AppError::llm("Question generation failed"))?;

    Ok(Json(GenerateQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        generated_at: Utc::now(),
    }))
}

/// POST /evaluate-answers
///
/// Answers pair with questions by position; count mismatches are rejected
/// before the model is called.
pub async fn handle_evaluate_answers(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<EvaluationRequest>,
) -> Result<Json<EvaluateAnswersResponse>, AppError> {
    validate_request(&request)?;

    let evaluation = evaluate_answers(state.llm.as_ref(), &request.questions, &request.answers)
        .await
        .map_err(AppError::llm("Answer evaluation failed"))?;

    Ok(Json(EvaluateAnswersResponse {
        success: true,
        evaluation,
        evaluated_at: Utc::now(),
    }))
}

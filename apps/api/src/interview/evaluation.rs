//! Answer evaluation: validates the pairing locally, then asks the model for a verdict.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::models::{
    CandidateAnswer, EvaluationQuestion, EvaluationRequest, EvaluationResult, MAX_SCORE,
};
use crate::interview::prompts::build_evaluation_prompt;
use crate::llm_client::{generate_json, LlmError, TextModel};

/// Input checks that must pass before any model call.
pub fn validate_request(request: &EvaluationRequest) -> Result<(), AppError> {
    if request.questions.is_empty() || request.answers.is_empty() {
        return Err(AppError::Validation(
            "Answers and questions are required".to_string(),
        ));
    }
    if request.questions.len() != request.answers.len() {
        return Err(AppError::Validation(format!(
            "Number of answers must match number of questions ({} answers, {} questions)",
            request.answers.len(),
            request.questions.len()
        )));
    }
    Ok(())
}

pub async fn evaluate_answers(
    model: &dyn TextModel,
    questions: &[EvaluationQuestion],
    answers: &[CandidateAnswer],
) -> Result<EvaluationResult, LlmError> {
    let prompt = build_evaluation_prompt(questions, answers);
    let mut evaluation: EvaluationResult = generate_json(model, &prompt).await?;

    check_score_range(&evaluation)?;
    if evaluation.individual_scores.len() != questions.len() {
        warn!(
            "Model scored {} answers out of {}",
            evaluation.individual_scores.len(),
            questions.len()
        );
    }

    evaluation.total_time = answers
        .iter()
        .fold(0u32, |total, a| total.saturating_add(a.time_taken));

    info!(
        "Evaluated {} answers: overall={}, recommendation={:?}",
        answers.len(),
        evaluation.overall_score,
        evaluation.recommendation
    );
    Ok(evaluation)
}

fn check_score_range(evaluation: &EvaluationResult) -> Result<(), LlmError> {
    let in_range = |score: f64| (0.0..=MAX_SCORE).contains(&score);

    if !in_range(evaluation.overall_score) {
        return Err(LlmError::Shape(format!(
            "overallScore {} is outside 0-{MAX_SCORE}",
            evaluation.overall_score
        )));
    }
    if let Some(bad) = evaluation
        .individual_scores
        .iter()
        .find(|s| !in_range(s.score))
    {
        return Err(LlmError::Shape(format!(
            "score {} for question {} is outside 0-{MAX_SCORE}",
            bad.score, bad.question_index
        )));
    }
    Ok(())
}

//! Request and response shapes for question generation and answer evaluation.

use serde::{Deserialize, Serialize};

/// Highest score the evaluation prompt allows, for both overall and per-answer scores.
pub const MAX_SCORE: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "easy", alias = "EASY")]
    Easy,
    #[default]
    #[serde(alias = "medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "hard", alias = "HARD")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Seconds the candidate gets to answer.
    pub fn time_limit_secs(self) -> u32 {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Medium => 60,
            Difficulty::Hard => 120,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// A question as produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub question: String,
    pub difficulty: Difficulty,
    pub time_limit: u32,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_experience")]
    pub experience: String,
    #[serde(default = "default_skills")]
    pub skills: Vec<String>,
}

impl Default for QuestionRequest {
    fn default() -> Self {
        Self {
            role: default_role(),
            experience: default_experience(),
            skills: default_skills(),
        }
    }
}

fn default_role() -> String {
    "Full Stack Developer".to_string()
}

fn default_experience() -> String {
    "Mid-level".to_string()
}

fn default_skills() -> Vec<String> {
    ["React", "Node.js", "JavaScript"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// A question echoed back by the client for evaluation. Lenient: clients may
/// send only the question text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "Technical".to_string()
}

/// The candidate's answer to the question at the same position.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "AnswerInput")]
pub struct CandidateAnswer {
    pub answer: String,
    pub time_taken: u32,
}

/// Accepts either `"answer text"` or `{"answer": ..., "timeTaken": ...}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnswerInput {
    Text(String),
    #[serde(rename_all = "camelCase")]
    Full {
        #[serde(default)]
        answer: String,
        #[serde(default)]
        time_taken: u32,
    },
}

impl From<AnswerInput> for CandidateAnswer {
    fn from(input: AnswerInput) -> Self {
        match input {
            AnswerInput::Text(answer) => CandidateAnswer {
                answer,
                time_taken: 0,
            },
            AnswerInput::Full { answer, time_taken } => CandidateAnswer { answer, time_taken },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub questions: Vec<EvaluationQuestion>,
    #[serde(default)]
    pub answers: Vec<CandidateAnswer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(alias = "hire", alias = "HIRE")]
    Hire,
    #[serde(alias = "consider", alias = "CONSIDER")]
    Consider,
    #[serde(alias = "reject", alias = "REJECT")]
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualScore {
    pub question_index: usize,
    pub score: f64,
    pub feedback: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// Model verdict on a full interview. All scores are on the 0-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub overall_score: f64,
    pub recommendation: Recommendation,
    pub summary: String,
    pub individual_scores: Vec<IndividualScore>,
    /// Sum of `timeTaken` across answers; recomputed server-side.
    #[serde(default)]
    pub total_time: u32,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

// Interview prompt templates and the builders that fill them in.

use crate::interview::models::{CandidateAnswer, Difficulty, EvaluationQuestion, QuestionRequest};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Number of questions every generated interview contains.
pub const QUESTION_COUNT: usize = 6;

pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Generate exactly 6 interview questions for a {role} position with {experience} experience.
Skills to focus on: {skills}

Requirements:
- 2 Easy questions ({easy_secs} seconds each)
- 2 Medium questions ({medium_secs} seconds each)
- 2 Hard questions ({hard_secs} seconds each)

Return a JSON array with this exact structure:
[
  {
    "question": "question text",
    "difficulty": "Easy" | "Medium" | "Hard",
    "timeLimit": {easy_secs} | {medium_secs} | {hard_secs},
    "category": "technical category"
  }
]

Focus on practical, real-world scenarios and technical concepts.
{json_only}"#;

pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are an expert technical interviewer. Evaluate the following interview answers.

QUESTIONS AND ANSWERS:
{qa_pairs}

Provide a comprehensive evaluation with:
1. Individual scores for each answer (0-10 scale)
2. Detailed feedback for each answer
3. Overall score (0-10 scale) and assessment
4. Strengths and areas for improvement
5. Final recommendation (Hire/Consider/Reject)

Return a JSON object with this exact structure:
{
  "overallScore": 0-10,
  "recommendation": "Hire" | "Consider" | "Reject",
  "summary": "brief overall assessment",
  "individualScores": [
    {
      "questionIndex": 0,
      "score": 0-10,
      "feedback": "detailed feedback",
      "strengths": ["strength1", "strength2"],
      "improvements": ["improvement1", "improvement2"]
    }
  ],
  "strengths": ["overall strength1", "overall strength2"],
  "improvements": ["overall improvement1", "overall improvement2"]
}

Use questionIndex values starting at 0, in the order given.
Consider technical accuracy, depth of knowledge, practical application,
communication clarity, and problem-solving approach.
{json_only}"#;

pub fn build_question_prompt(request: &QuestionRequest) -> String {
    let skills = if request.skills.is_empty() {
        "general software engineering".to_string()
    } else {
        request.skills.join(", ")
    };

    QUESTION_PROMPT_TEMPLATE
        .replace("{role}", request.role.trim())
        .replace("{experience}", request.experience.trim())
        .replace("{skills}", &skills)
        .replace("{easy_secs}", &Difficulty::Easy.time_limit_secs().to_string())
        .replace("{medium_secs}", &Difficulty::Medium.time_limit_secs().to_string())
        .replace("{hard_secs}", &Difficulty::Hard.time_limit_secs().to_string())
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}

/// Callers must pass equally long slices; pairs are formed positionally.
pub fn build_evaluation_prompt(
    questions: &[EvaluationQuestion],
    answers: &[CandidateAnswer],
) -> String {
    let qa_pairs: Vec<String> = questions
        .iter()
        .zip(answers)
        .enumerate()
        .map(|(i, (q, a))| {
            format!(
                "Question {n}: {question}\nDifficulty: {difficulty}\nCategory: {category}\n\
                 Candidate Answer: {answer}\nTime Taken: {secs} seconds\n",
                n = i + 1,
                question = q.question.trim(),
                difficulty = q.difficulty,
                category = q.category,
                answer = a.answer.trim(),
                secs = a.time_taken,
            )
        })
        .collect();

    EVALUATION_PROMPT_TEMPLATE
        .replace("{qa_pairs}", &qa_pairs.join("\n"))
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_interpolates_request() {
        let prompt = build_question_prompt(&QuestionRequest {
            role: "Backend Engineer".to_string(),
            experience: "Senior".to_string(),
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        });
        assert!(prompt.contains("for a Backend Engineer position with Senior experience"));
        assert!(prompt.contains("Skills to focus on: Rust, PostgreSQL"));
        assert!(prompt.contains("2 Hard questions (120 seconds each)"));
        assert!(!prompt.contains("{role}"));
        assert!(!prompt.contains("{json_only}"));
    }

    #[test]
    fn test_question_prompt_with_empty_skills() {
        let prompt = build_question_prompt(&QuestionRequest {
            skills: vec![],
            ..QuestionRequest::default()
        });
        assert!(prompt.contains("Skills to focus on: general software engineering"));
    }

    #[test]
    fn test_evaluation_prompt_numbers_pairs() {
        let questions = vec![
            EvaluationQuestion {
                question: "What is a closure?".to_string(),
                difficulty: Difficulty::Easy,
                category: "JavaScript".to_string(),
            },
            EvaluationQuestion {
                question: "Design a rate limiter.".to_string(),
                difficulty: Difficulty::Hard,
                category: "System Design".to_string(),
            },
        ];
        let answers = vec![
            CandidateAnswer {
                answer: "A function with captured scope.".to_string(),
                time_taken: 15,
            },
            CandidateAnswer {
                answer: "Token bucket in Redis.".to_string(),
                time_taken: 110,
            },
        ];

        let prompt = build_evaluation_prompt(&questions, &answers);
        assert!(prompt.contains("Question 1: What is a closure?\nDifficulty: Easy"));
        assert!(prompt.contains("Question 2: Design a rate limiter.\nDifficulty: Hard"));
        assert!(prompt.contains("Time Taken: 110 seconds"));
        assert!(prompt.contains("Overall score (0-10 scale)"));
        assert!(!prompt.contains("{qa_pairs}"));
    }
}

//! Axum route handler for the career assessment quiz.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assessment::prompts::build_assessment_prompt;
use crate::errors::AppError;
use crate::llm_client::prompts::CAREER_STRATEGIST_SYSTEM;
use crate::state::AppState;

/// Number of questions in the front-end quiz.
pub const ASSESSMENT_QUESTION_COUNT: usize = 10;

const INCOMPLETE_ANSWERS: &str = "Please provide all 10 answers.";
const UPSTREAM_FAILURE: &str = "Failed to generate career assessment.";

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub result: String,
}

/// POST /career-assessment
///
/// Answers are the literal option text the user picked, one per question.
pub async fn handle_career_assessment(
    State(state): State<AppState>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let Json(request) = payload?;

    validate_answers(&request.answers)?;
    info!(answers = request.answers.len(), "Career assessment received");

    let prompt = build_assessment_prompt(&request.answers);
    let result = state
        .llm
        .generate(&prompt, CAREER_STRATEGIST_SYSTEM)
        .await
        .map_err(AppError::llm(UPSTREAM_FAILURE))?;

    Ok(Json(AssessmentResponse {
        result: result.trim().to_string(),
    }))
}

fn validate_answers(answers: &[String]) -> Result<(), AppError> {
    if answers.len() != ASSESSMENT_QUESTION_COUNT || answers.iter().any(|a| a.trim().is_empty())
    {
        return Err(AppError::validation(INCOMPLETE_ANSWERS));
    }
    Ok(())
}

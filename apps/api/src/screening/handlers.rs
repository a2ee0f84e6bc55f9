//! Axum route handler for the resume screener.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::CAREER_STRATEGIST_SYSTEM;
use crate::screening::prompts::build_screen_prompt;
use crate::skills::resume::{truncate_chars, MAX_RESUME_CHARS};
use crate::state::AppState;

const RESUME_REQUIRED: &str = "Resume text is required.";
const UPSTREAM_FAILURE: &str = "Failed to review resume.";

#[derive(Debug, Deserialize)]
pub struct ScreenResumeRequest {
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScreenResumeResponse {
    pub feedback: String,
}

/// POST /resume
///
/// Reviews pasted resume text. Text past `MAX_RESUME_CHARS` is cut before the
/// model sees it, the same as for uploaded files.
pub async fn handle_screen_resume(
    State(state): State<AppState>,
    payload: Result<Json<ScreenResumeRequest>, JsonRejection>,
) -> Result<Json<ScreenResumeResponse>, AppError> {
    let Json(request) = payload?;

    let resume = request
        .resume
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::validation(RESUME_REQUIRED))?;

    let resume = truncate_chars(resume, MAX_RESUME_CHARS);
    info!(chars = resume.chars().count(), "Resume screening requested");

    let feedback = state
        .llm
        .generate(&build_screen_prompt(resume), CAREER_STRATEGIST_SYSTEM)
        .await
        .map_err(AppError::llm(UPSTREAM_FAILURE))?;

    Ok(Json(ScreenResumeResponse {
        feedback: feedback.trim().to_string(),
    }))
}

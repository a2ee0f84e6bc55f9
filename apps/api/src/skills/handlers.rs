//! Axum route handlers for resume skill extraction and skill-gap analysis.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{generate_json, prompts::JSON_ONLY_SYSTEM};
use crate::skills::prompts::{build_analyze_prompt, build_extract_prompt, EXTRACT_SKILLS_SYSTEM};
use crate::skills::report::SkillGapReport;
use crate::skills::resume::{extract_text, normalize_skill_list, ResumeError, ResumeUpload};
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

const EXTRACT_FAILURE: &str = "Failed to process resume.";
const EXTRACT_TASK_FAILED: &str = "Resume text extraction task failed";
const ANALYZE_FAILURE: &str = "Failed to analyze skills with AI.";
const ANALYZE_MISSING_FIELDS: &str = "Skills and target role are required.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSkillsRequest {
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub target_role: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /extract-skills
///
/// Multipart upload (field `resume`). Validates size and extension, extracts
/// the document text, and asks the model for a comma-separated skill list.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;
    let limit_mb = state.config.max_upload_mb();

    let upload = read_resume_field(&mut multipart)
        .await
        .map_err(|e| multipart_error(e, limit_mb))?
        .ok_or(ResumeError::Missing)?;

    upload.validate(state.config.max_upload_bytes)?;
    let format = upload.format().ok_or(ResumeError::UnsupportedFormat)?;

    info!(
        file_name = %upload.file_name,
        bytes = upload.data.len(),
        ?format,
        "Resume received"
    );

    let data = upload.data;
    // pdf-extract panics on some malformed documents; treat that as unreadable.
    let text = match tokio::task::spawn_blocking(move || extract_text(format, &data)).await {
        Ok(result) => result?,
        Err(err) if err.is_panic() => {
            return Err(ResumeError::Unreadable("text extractor panicked".to_string()).into())
        }
        Err(err) => return Err(anyhow::Error::new(err).context(EXTRACT_TASK_FAILED).into()),
    };

    let prompt = build_extract_prompt(&text);
    let raw = state
        .llm
        .generate(&prompt, EXTRACT_SKILLS_SYSTEM)
        .await
        .map_err(AppError::llm(EXTRACT_FAILURE))?;

    Ok(Json(ExtractSkillsResponse {
        skills: normalize_skill_list(&raw),
    }))
}

/// POST /analyze-skills
///
/// Returns a `SkillGapReport` generated by the model for the given skills and role.
pub async fn handle_analyze_skills(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeSkillsRequest>, JsonRejection>,
) -> Result<Json<SkillGapReport>, AppError> {
    let Json(request) = payload?;

    let (skills, target_role) = match (non_blank(&request.skills), non_blank(&request.target_role))
    {
        (Some(skills), Some(role)) => (skills, role),
        _ => return Err(AppError::validation(ANALYZE_MISSING_FIELDS)),
    };

    info!(target_role, "Skill-gap analysis requested");

    let prompt = build_analyze_prompt(skills, target_role);
    let report: SkillGapReport = generate_json(state.llm.as_ref(), &prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(AppError::llm(ANALYZE_FAILURE))?;

    Ok(Json(report.normalize()))
}

/// Takes the first `resume` field; other fields are skipped.
async fn read_resume_field(
    multipart: &mut Multipart,
) -> Result<Option<ResumeUpload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        return Ok(Some(ResumeUpload {
            file_name,
            content_type,
            data,
        }));
    }
    Ok(None)
}

fn multipart_error(err: MultipartError, limit_mb: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ResumeError::TooLarge { limit_mb }.into()
    } else {
        AppError::Validation(err.body_text())
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

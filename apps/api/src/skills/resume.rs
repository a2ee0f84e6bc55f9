//! Resume upload checks and plain-text extraction.
//!
//! PDF goes through `pdf-extract`, DOCX through `docx-rs`. A DOCX is a zip
//! container, so its inflated size is bounded before the document is parsed.

use std::io::{self, Cursor, Read};

use bytes::Bytes;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOC_MIME: &str = "application/msword";

const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Longest resume text forwarded to the model, in characters.
pub const MAX_RESUME_CHARS: usize = 30_000;

/// Total bytes a DOCX archive may inflate to.
pub const MAX_DOCX_EXPANDED_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
    /// Legacy binary Word. Accepted at upload, but there is no text extractor for it.
    Doc,
}

/// A file pulled out of the `resume` multipart field.
#[derive(Debug)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("No resume file uploaded.")]
    Missing,

    #[error("File too large. Please select a file smaller than {limit_mb}MB.")]
    TooLarge { limit_mb: usize },

    #[error("Invalid file type. Please upload a PDF, DOC, or DOCX file.")]
    InvalidExtension,

    #[error("Unsupported file type. Please upload a PDF or DOCX.")]
    UnsupportedFormat,

    #[error("Could not read the resume file.")]
    Unreadable(String),

    #[error("Could not read any text from the resume.")]
    NoText,

    #[error("Resume document is too large to process.")]
    ExpandsTooLarge,
}

impl From<ResumeError> for AppError {
    fn from(err: ResumeError) -> Self {
        let message = err.to_string();
        match err {
            ResumeError::TooLarge { .. } | ResumeError::ExpandsTooLarge => {
                AppError::PayloadTooLarge(message)
            }
            ResumeError::Unreadable(detail) => {
                tracing::warn!("Resume parse failed: {detail}");
                AppError::Validation(message)
            }
            _ => AppError::Validation(message),
        }
    }
}

impl ResumeUpload {
    /// Size, then extension. Runs before any parsing or model call.
    pub fn validate(&self, max_bytes: usize) -> Result<(), ResumeError> {
        if self.data.is_empty() {
            return Err(ResumeError::Missing);
        }
        if self.data.len() > max_bytes {
            return Err(ResumeError::TooLarge {
                limit_mb: max_bytes / (1024 * 1024),
            });
        }
        match extension(&self.file_name) {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(ResumeError::InvalidExtension),
        }
    }

    pub fn format(&self) -> Option<ResumeFormat> {
        detect_format(self.content_type.as_deref(), &self.file_name)
    }
}

fn extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Content type wins; a missing or generic content type falls back to the extension.
pub fn detect_format(content_type: Option<&str>, file_name: &str) -> Option<ResumeFormat> {
    let mime = content_type
        .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
        .unwrap_or_default();

    match mime.as_str() {
        PDF_MIME => Some(ResumeFormat::Pdf),
        DOCX_MIME => Some(ResumeFormat::Docx),
        DOC_MIME => Some(ResumeFormat::Doc),
        "" | "application/octet-stream" => match extension(file_name).as_deref() {
            Some("pdf") => Some(ResumeFormat::Pdf),
            Some("docx") => Some(ResumeFormat::Docx),
            Some("doc") => Some(ResumeFormat::Doc),
            _ => None,
        },
        _ => None,
    }
}

/// Extracts plain text, truncated to `MAX_RESUME_CHARS`. CPU-bound: call from
/// a blocking task.
pub fn extract_text(format: ResumeFormat, data: &[u8]) -> Result<String, ResumeError> {
    let text = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(data).map_err(unreadable)?,
        ResumeFormat::Docx => extract_docx_text(data, MAX_DOCX_EXPANDED_BYTES)?,
        ResumeFormat::Doc => return Err(ResumeError::UnsupportedFormat),
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ResumeError::NoText);
    }
    Ok(truncate_chars(text, MAX_RESUME_CHARS).to_string())
}

/// Refuses archives whose entries inflate past `limit` bytes in total. The
/// inflated size is measured by reading, not taken from the zip headers.
fn check_expanded_size(data: &[u8], limit: u64) -> Result<(), ResumeError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(unreadable)?;

    let mut total = 0u64;
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(unreadable)?;
        let budget = limit - total;
        total += io::copy(&mut entry.take(budget + 1), &mut io::sink()).map_err(unreadable)?;
        if total > limit {
            return Err(ResumeError::ExpandsTooLarge);
        }
    }
    Ok(())
}

/// One output line per non-empty paragraph; run tabs and breaks are kept.
fn extract_docx_text(data: &[u8], expanded_limit: u64) -> Result<String, ResumeError> {
    check_expanded_size(data, expanded_limit)?;
    let docx = docx_rs::read_docx(data).map_err(unreadable)?;

    let mut text = String::new();
    for child in docx.document.children {
        let DocumentChild::Paragraph(paragraph) = child else {
            continue;
        };
        for child in paragraph.children {
            let ParagraphChild::Run(run) = child else {
                continue;
            };
            for item in run.children {
                match item {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
        text.push('\n');
    }

    Ok(text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn unreadable(err: impl std::fmt::Display) -> ResumeError {
    ResumeError::Unreadable(err.to_string())
}

pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Folds model output into one comma-separated list. Newlines become
/// separators, bullet and emphasis markers are stripped from both ends of an
/// item, blank items are dropped, and repeats (case-insensitive) keep their
/// first spelling.
pub fn normalize_skill_list(raw: &str) -> String {
    let mut seen = std::collections::HashSet::new();
    raw.replace('\n', ",")
        .split(',')
        .map(|s| {
            s.trim()
                .trim_matches(|c: char| matches!(c, '•' | '-' | '*' | '_'))
                .trim()
        })
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect::<Vec<_>>()
        .join(", ")
}

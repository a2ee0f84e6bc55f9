// Resume screener prompt template.

use crate::llm_client::prompts::FORMATTING_INSTRUCTION;

pub const SCREEN_RESUME_PROMPT: &str = r#"Review the resume text below and give feedback in three sections:
1. Strengths: what the resume already does well.
2. Weaknesses: gaps, vague claims or missing information.
3. Improvements: concrete changes that would help the candidate's career growth.
{formatting}

Resume text:
"""
{resume}
""""#;

pub fn build_screen_prompt(resume: &str) -> String {
    SCREEN_RESUME_PROMPT
        .replace("{formatting}", FORMATTING_INSTRUCTION)
        .replace("{resume}", resume)
}

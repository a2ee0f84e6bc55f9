// Career assessment prompt template.

use crate::llm_client::prompts::FORMATTING_INSTRUCTION;

pub const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"You are a career guidance expert.
Based on these answers to a 10-question career quiz, suggest the most suitable career goal.

Answers:
{answers}

Return the result in this format:
1. Best Career Match (with explanation)
2. 3 Alternative Career Options (with short reasons)
3. Suggested Next Steps (skills to learn, path to follow)

Rules:
- Respond in a few short paragraphs
{formatting}"#;

/// Numbers the answers one per line, in quiz order.
pub fn build_assessment_prompt(answers: &[String]) -> String {
    let numbered = answers
        .iter()
        .enumerate()
        .map(|(i, a)| format!("{}. {}", i + 1, a.trim()))
        .collect::<Vec<_>>()
        .join("\n");

    ASSESSMENT_PROMPT_TEMPLATE
        .replace("{formatting}", FORMATTING_INSTRUCTION)
        .replace("{answers}", &numbered)
}

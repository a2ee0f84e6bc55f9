// Chat relay prompt template.

use crate::llm_client::prompts::FORMATTING_INSTRUCTION;

pub const CHAT_PROMPT_TEMPLATE: &str = r#"Answer the user's message below.
{formatting}

User's message: "{message}""#;

pub fn build_chat_prompt(message: &str) -> String {
    CHAT_PROMPT_TEMPLATE
        .replace("{formatting}", FORMATTING_INSTRUCTION)
        .replace("{message}", message)
}

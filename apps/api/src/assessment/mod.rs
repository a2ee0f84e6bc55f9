// Career assessment quiz: ten answers in, free-text guidance out.

pub mod handlers;
pub mod prompts;

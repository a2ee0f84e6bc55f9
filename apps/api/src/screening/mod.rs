// Resume screener: pasted resume text in, strengths/weaknesses/improvements out.

pub mod handlers;
pub mod prompts;

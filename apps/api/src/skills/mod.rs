// Skills: resume skill extraction and skill-gap analysis.
// All model calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod report;
pub mod resume;

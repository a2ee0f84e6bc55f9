// Skills module LLM prompt templates.
// All prompts for resume extraction and skill-gap analysis are defined here.

pub const EXTRACT_SKILLS_SYSTEM: &str = "\
You are a precise resume skill extractor. \
Only list skills that actually appear in the resume text. Do not invent skills.";

pub const EXTRACT_SKILLS_PROMPT: &str = r#"From the following resume text, extract all the technical skills, programming languages, frameworks, and tools.
Return them as a single string, with each skill separated by a comma. Return nothing else.

Resume Text:
"{resume_text}""#;

pub const ANALYZE_SKILLS_PROMPT: &str = r#"You are an expert career coach and skills analyst. Analyze the skills gap for a person wanting to become a "{target_role}".
Their current skills are: "{skills}".

Provide the analysis in a strict JSON format only. Do not include any text, explanation, or markdown characters like ```json outside of the main JSON object.
The JSON object must have this exact structure:
{
  "matchPercentage": <number between 0-100>,
  "currentSkills": [
    { "name": "<skill_name>", "level": <number between 50-95>, "status": "<'strong'|'good'|'developing'>" }
  ],
  "missingSkills": [
    { "name": "<skill_name>", "importance": "<'High'|'Medium'>", "description": "<brief_description>", "timeToLearn": "<estimated_time>" }
  ],
  "recommendations": [
    { "type": "<'course'|'certification'|'project'>", "title": "<item_title>", "provider": "<provider_name>", "duration": "<estimated_duration>", "rating": <number between 4.5-4.9>, "price": "<price_string>" }
  ]
}

- Base the "level" on how relevant the current skill is to the target role.
- Identify 3-4 key "missingSkills".
- Provide 3 diverse "recommendations" (one course, one certification, one project)."#;

pub fn build_extract_prompt(resume_text: &str) -> String {
    EXTRACT_SKILLS_PROMPT.replace("{resume_text}", resume_text)
}

pub fn build_analyze_prompt(skills: &str, target_role: &str) -> String {
    ANALYZE_SKILLS_PROMPT
        .replace("{target_role}", target_role)
        .replace("{skills}", skills)
}

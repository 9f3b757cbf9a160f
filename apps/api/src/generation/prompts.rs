// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Output budget for skill extraction.
pub const EXTRACT_MAX_TOKENS: u32 = 100;

/// Output budget for experience rewriting.
pub const REWRITE_MAX_TOKENS: u32 = 500;

/// System prompt for skill extraction.
pub const EXTRACT_SYSTEM: &str =
    "Extract key skills from job descriptions and return as a JSON list.";

/// Skill extraction prompt template.
/// Replace: {job_description}, {json_only}
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract key skills from this job description:
{job_description}.
{json_only}: {"skills": ["skill1", "skill2", "skill3"]}"#;

/// System prompt for experience rewriting.
/// Replace: {style_instruction}
pub const REWRITE_SYSTEM_TEMPLATE: &str = "You are an AI that rewrites job experience \
    descriptions to match a job description. {style_instruction}";

/// Experience rewrite prompt template.
/// Replace: {job_description}, {experiences}, {rewrite_rules}, {style_instruction}
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"Given the following job description:

{job_description}

And these user-selected job experiences:

{experiences}

**Rewrite these experiences to be more relevant to the job description.**
{rewrite_rules}
- {style_instruction}

**Return only the rewritten experiences in structured text format.**"#;

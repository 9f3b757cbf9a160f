// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting pieces reused by more than one prompt.

/// Appended to prompts whose answer is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond only in JSON format";

/// Writing rules shared by every rewrite prompt.
pub const REWRITE_RULES: &str = "\
- Keep them realistic.
- Use strong action verbs.
- Focus on achievements and relevant skills.";

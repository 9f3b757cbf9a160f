// Skill extraction and resume composition.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod composer;
pub mod handlers;
pub mod prompts;
pub mod skill_extractor;
pub mod style;
pub mod template;

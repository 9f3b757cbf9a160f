//! Skill Extractor — asks the model for the key skills of a job description.
//!
//! The model is told to answer `{"skills": [...]}`. Its answer is parsed strictly:
//! no fence stripping, no repair. A bad answer still costs the caller the
//! analyze cooldown, because the gate is consulted before the call goes out.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::generation::prompts::{EXTRACT_MAX_TOKENS, EXTRACT_PROMPT_TEMPLATE, EXTRACT_SYSTEM};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{CompletionClient, CompletionRequest, LlmError};
use crate::rate_limit::{Clock, GateId, RateGate};

/// Why skill extraction failed. Each kind renders the message shown to the user.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    RateLimited(String),

    #[error("Failed to connect to OpenAI servers. Check your internet connection.")]
    Connectivity,

    #[error("Too many requests! Please wait before trying again.")]
    Throttled,

    #[error("Invalid OpenAI API key. Check your OPENAI_API_KEY setting.")]
    Auth,

    #[error("AI response is not valid JSON")]
    MalformedResponse,

    #[error("Unexpected AI response format")]
    UnexpectedShape,

    #[error("{0}")]
    Upstream(String),
}

impl From<LlmError> for ExtractError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Connectivity(detail) => {
                warn!("Completion endpoint unreachable: {detail}");
                ExtractError::Connectivity
            }
            LlmError::Auth { .. } => ExtractError::Auth,
            LlmError::Throttled => ExtractError::Throttled,
            other => ExtractError::Upstream(other.to_string()),
        }
    }
}

/// Ordered skills pulled from one job description.
///
/// Case-insensitive duplicates and blank entries are dropped; the first
/// spelling of each skill wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(Into::into)
            .filter(|s| !s.trim().is_empty())
            .filter(|s| seen.insert(s.to_lowercase()))
            .collect();
        Self(skills)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Comma-joined, as printed in the resume's skills section.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Extracts skills from `job_description`, consulting the analyze gate first.
///
/// Empty descriptions are forwarded as-is; whatever the model answers decides the outcome.
pub async fn extract_skills(
    job_description: &str,
    llm: &dyn CompletionClient,
    gate: &RateGate,
    clock: &dyn Clock,
) -> Result<SkillSet, ExtractError> {
    if !gate.admit(GateId::Analyze, clock.now()) {
        warn!("Skill extraction rejected by cooldown");
        return Err(ExtractError::RateLimited(
            gate.rejection_message(GateId::Analyze),
        ));
    }

    let request = CompletionRequest {
        system: EXTRACT_SYSTEM.to_string(),
        user: build_extract_prompt(job_description),
        max_tokens: EXTRACT_MAX_TOKENS,
        temperature: None,
    };

    let text = llm.complete(request).await?;
    let skills = parse_skills_response(&text)?;
    info!("Extracted {} skills from job description", skills.len());
    Ok(skills)
}

fn build_extract_prompt(job_description: &str) -> String {
    // Job description goes in last so its text is never scanned for placeholders.
    EXTRACT_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{job_description}", job_description)
}

/// Parses the model's answer into a `SkillSet`.
///
/// Non-string elements are kept in their JSON text form.
pub fn parse_skills_response(text: &str) -> Result<SkillSet, ExtractError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        warn!("Skill extraction returned non-JSON text: {e}");
        ExtractError::MalformedResponse
    })?;

    let skills = match value {
        Value::Object(mut map) => match map.remove("skills") {
            Some(Value::Array(items)) => items,
            _ => return Err(ExtractError::UnexpectedShape),
        },
        _ => return Err(ExtractError::UnexpectedShape),
    };

    Ok(SkillSet::new(skills.into_iter().map(|item| match item {
        Value::String(s) => s,
        other => other.to_string(),
    })))
}

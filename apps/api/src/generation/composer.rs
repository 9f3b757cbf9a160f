//! Resume Composer — rewrites the selected experiences for a job and fills the resume template.
//!
//! Flow: generate gate → extract_skills (own analyze gate) → render experience block →
//!       style instruction → LLM rewrite (temperature = creativity) → template.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::generation::prompts::{
    REWRITE_MAX_TOKENS, REWRITE_PROMPT_TEMPLATE, REWRITE_SYSTEM_TEMPLATE,
};
use crate::generation::skill_extractor::{extract_skills, ExtractError, SkillSet};
use crate::generation::style::ResumeStyle;
use crate::generation::template::{render_resume, Profile};
use crate::llm_client::prompts::REWRITE_RULES;
use crate::llm_client::{CompletionClient, CompletionRequest};
use crate::rate_limit::{Clock, GateId, RateGate};

/// Creativity used when the caller does not pick one.
pub const DEFAULT_CREATIVITY: f32 = 0.5;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("{0}")]
    RateLimited(String),

    /// Skill extraction failed; the underlying kind is kept.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("{0}")]
    UpstreamFailure(String),
}

/// One experience chosen by the user for the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedExperience {
    pub title: String,
    pub company: String,
    pub responsibilities: String,
}

/// Everything the composer needs for one resume.
#[derive(Debug, Clone)]
pub struct ComposeRequest {
    pub job_description: String,
    pub experiences: Vec<SelectedExperience>,
    /// Sampling temperature, 0.0 (strict) to 1.0 (creative).
    pub creativity: f32,
    pub style: ResumeStyle,
}

/// Output of one composition: the editable resume text plus the skills it was built from.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedResume {
    pub skills: SkillSet,
    pub resume: String,
}

/// Composes a tailored resume.
///
/// Consults the generate gate, then runs skill extraction, which consults the
/// analyze gate on its own. Both must be open for a resume to come back.
pub async fn compose_resume(
    request: &ComposeRequest,
    llm: &dyn CompletionClient,
    gate: &RateGate,
    clock: &dyn Clock,
    profile: &Profile,
) -> Result<GeneratedResume, ComposeError> {
    if !gate.admit(GateId::Generate, clock.now()) {
        warn!("Resume generation rejected by cooldown");
        return Err(ComposeError::RateLimited(
            gate.rejection_message(GateId::Generate),
        ));
    }

    let skills = extract_skills(&request.job_description, llm, gate, clock).await?;

    let experiences = format_experiences(&request.experiences);
    let style_instruction = request.style.instruction();

    let completion = CompletionRequest {
        system: REWRITE_SYSTEM_TEMPLATE.replace("{style_instruction}", style_instruction),
        user: build_rewrite_prompt(&request.job_description, &experiences, style_instruction),
        max_tokens: REWRITE_MAX_TOKENS,
        temperature: Some(effective_creativity(request.creativity)),
    };

    let rewritten = llm
        .complete(completion)
        .await
        .map_err(|e| ComposeError::UpstreamFailure(e.to_string()))?;

    info!(
        "Composed resume from {} experiences with style {:?}",
        request.experiences.len(),
        request.style
    );

    Ok(GeneratedResume {
        resume: render_resume(profile, &skills, &rewritten),
        skills,
    })
}

/// Renders selections as `{title} at {company}: {responsibilities}`, one per line.
pub fn format_experiences(experiences: &[SelectedExperience]) -> String {
    experiences
        .iter()
        .map(|e| format!("{} at {}: {}", e.title, e.company, e.responsibilities))
        .collect::<Vec<_>>()
        .join("\n")
}

fn effective_creativity(creativity: f32) -> f32 {
    if creativity.is_finite() {
        creativity.clamp(0.0, 1.0)
    } else {
        DEFAULT_CREATIVITY
    }
}

fn build_rewrite_prompt(job_description: &str, experiences: &str, style_instruction: &str) -> String {
    // User-supplied text is substituted last so it is never scanned for placeholders.
    REWRITE_PROMPT_TEMPLATE
        .replace("{rewrite_rules}", REWRITE_RULES)
        .replace("{style_instruction}", style_instruction)
        .replace("{experiences}", experiences)
        .replace("{job_description}", job_description)
}

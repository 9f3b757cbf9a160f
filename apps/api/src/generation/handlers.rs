//! Axum route handlers for the analyze and generate operations.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::experiences::matching::{rank_experiences, RankedExperience};
use crate::generation::composer::{
    compose_resume, ComposeRequest, SelectedExperience, DEFAULT_CREATIVITY,
};
use crate::generation::skill_extractor::{extract_skills, SkillSet};
use crate::generation::style::ResumeStyle;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub skills: SkillSet,
    /// Matched experiences first, then the rest of the store.
    pub experiences: Vec<RankedExperience>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub job_description: String,
    pub experiences: Vec<SelectedExperience>,
    #[serde(default = "default_creativity")]
    pub creativity: f32,
    #[serde(default)]
    pub style: ResumeStyle,
}

fn default_creativity() -> f32 {
    DEFAULT_CREATIVITY
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub skills: SkillSet,
    /// Editable resume text; markup is stripped at export.
    pub resume: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/analyze
///
/// Extracts skills from the job description and lists stored experiences,
/// matched ones first.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let job_description = request.job_description.trim();
    if job_description.is_empty() {
        return Err(AppError::Validation(
            "Please paste a job description first.".to_string(),
        ));
    }

    let skills = extract_skills(
        job_description,
        state.llm.as_ref(),
        &state.gate,
        state.clock.as_ref(),
    )
    .await?;
    if skills.is_empty() {
        warn!("No skills extracted; no experience will be marked as a match");
    }

    let all = state.store.find_all().await?;
    let matched = state.store.find_matches(skills.as_slice()).await?;
    info!(
        "Analyze: {} skills, {} of {} experiences matched",
        skills.len(),
        matched.len(),
        all.len()
    );

    Ok(Json(AnalyzeResponse {
        skills,
        experiences: rank_experiences(matched, all),
    }))
}

/// POST /api/v1/resumes/generate
///
/// Rewrites the selected experiences for the job and returns the filled resume template.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please paste a job description first.".to_string(),
        ));
    }
    if request.experiences.is_empty() {
        return Err(AppError::Validation(
            "Please select at least one experience.".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&request.creativity) {
        return Err(AppError::Validation(
            "Creativity must be between 0.0 and 1.0.".to_string(),
        ));
    }

    let compose_request = ComposeRequest {
        job_description: request.job_description,
        experiences: request.experiences,
        creativity: request.creativity,
        style: request.style,
    };

    let generated = compose_resume(
        &compose_request,
        state.llm.as_ref(),
        &state.gate,
        state.clock.as_ref(),
        &state.profile,
    )
    .await?;

    Ok(Json(GenerateResponse {
        skills: generated.skills,
        resume: generated.resume,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_defaults() {
        let request: GenerateRequest = serde_json::from_value(serde_json::json!({
            "job_description": "Rust engineer",
            "experiences": [
                {"title": "Engineer", "company": "Acme", "responsibilities": "Built APIs"}
            ]
        }))
        .unwrap();
        assert_eq!(request.creativity, DEFAULT_CREATIVITY);
        assert_eq!(request.style, ResumeStyle::Professional);
        assert_eq!(request.experiences.len(), 1);
    }

    #[test]
    fn test_generate_request_unknown_style_is_accepted() {
        let request: GenerateRequest = serde_json::from_value(serde_json::json!({
            "job_description": "Rust engineer",
            "experiences": [],
            "style": "Poetic"
        }))
        .unwrap();
        assert_eq!(request.style, ResumeStyle::Balanced);
    }
}

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::export::flatten::flatten_resume;
use crate::export::layout::{plan_pdf, plan_word, PdfLayout, PdfPlan, WordLayout, WordPlan};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Word,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub resume_text: String,
    pub format: ExportFormat,
}

#[derive(Debug, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ExportPlan {
    Pdf(PdfPlan),
    Word(WordPlan),
}

/// POST /api/v1/resumes/export
///
/// Flattens the (possibly edited) resume and lays it out for the chosen format.
pub async fn handle_export(Json(request): Json<ExportRequest>) -> Result<Json<ExportPlan>, AppError> {
    let lines = flatten_resume(&request.resume_text);
    if lines.is_empty() {
        return Err(AppError::Validation(
            "Cannot export an empty resume.".to_string(),
        ));
    }

    let plan = match request.format {
        ExportFormat::Pdf => ExportPlan::Pdf(plan_pdf(&lines, &PdfLayout::default())),
        ExportFormat::Word => ExportPlan::Word(plan_word(&lines, &WordLayout::default())),
    };
    Ok(Json(plan))
}

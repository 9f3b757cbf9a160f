use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::experiences::models::{ExperienceRecord, NewExperience};
use crate::state::AppState;

/// GET /api/v1/experiences
pub async fn handle_list_experiences(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExperienceRecord>>, AppError> {
    Ok(Json(state.store.find_all().await?))
}

/// POST /api/v1/experiences
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Json(request): Json<NewExperience>,
) -> Result<(StatusCode, Json<ExperienceRecord>), AppError> {
    let new = request.validated().map_err(AppError::Validation)?;
    let record = state.store.insert(&new).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

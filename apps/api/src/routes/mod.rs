pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::experiences::handlers as experiences;
use crate::export::handlers as export;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Experience Store
        .route(
            "/api/v1/experiences",
            get(experiences::handle_list_experiences).post(experiences::handle_add_experience),
        )
        // Skill extraction + matching
        .route("/api/v1/jobs/analyze", post(generation::handle_analyze))
        // Resume composition and export
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        .route("/api/v1/resumes/export", post(export::handle_export))
        .with_state(state)
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::composer::ComposeError;
use crate::generation::skill_extractor::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant's message is shown to the user as-is.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Persistence(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_ERROR"),
            AppError::Extract(e) => extract_status(e),
            AppError::Compose(ComposeError::RateLimited(_)) => {
                (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED")
            }
            AppError::Compose(ComposeError::Extract(e)) => extract_status(e),
            AppError::Compose(ComposeError::UpstreamFailure(_)) => {
                (StatusCode::BAD_GATEWAY, "UPSTREAM_FAILURE")
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

fn extract_status(e: &ExtractError) -> (StatusCode, &'static str) {
    match e {
        ExtractError::RateLimited(_) => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
        ExtractError::Throttled => (StatusCode::TOO_MANY_REQUESTS, "UPSTREAM_THROTTLED"),
        ExtractError::Connectivity => (StatusCode::BAD_GATEWAY, "CONNECTIVITY_FAILURE"),
        ExtractError::Auth => (StatusCode::BAD_GATEWAY, "AUTH_FAILURE"),
        ExtractError::MalformedResponse => (StatusCode::BAD_GATEWAY, "MALFORMED_RESPONSE"),
        ExtractError::UnexpectedShape => (StatusCode::BAD_GATEWAY, "UNEXPECTED_SHAPE"),
        ExtractError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_FAILURE"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        match &self {
            // Failed inserts are already logged by the store.
            AppError::Persistence(e) => tracing::warn!("Request failed ({code}): {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            AppError::Validation(_) => {}
            other => tracing::warn!("Request failed ({code}): {other}"),
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let (status, code) = AppError::Validation("x".into()).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_local_rate_limit_and_upstream_throttle_have_distinct_codes() {
        let local = AppError::Extract(ExtractError::RateLimited("slow".into())).status_and_code();
        let upstream = AppError::Extract(ExtractError::Throttled).status_and_code();
        assert_eq!(local.0, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(upstream.0, StatusCode::TOO_MANY_REQUESTS);
        assert_ne!(local.1, upstream.1);
    }

    #[test]
    fn test_wrapped_extract_error_keeps_its_code() {
        let direct = AppError::Extract(ExtractError::MalformedResponse).status_and_code();
        let wrapped =
            AppError::Compose(ComposeError::Extract(ExtractError::MalformedResponse)).status_and_code();
        assert_eq!(direct, wrapped);
    }

    #[test]
    fn test_message_is_verbatim() {
        let err = AppError::Extract(ExtractError::UnexpectedShape);
        assert_eq!(err.to_string(), "Unexpected AI response format");
    }

    #[test]
    fn test_persistence_maps_to_500() {
        let (status, code) = AppError::Persistence(sqlx::Error::RowNotFound).status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "PERSISTENCE_ERROR");
    }
}

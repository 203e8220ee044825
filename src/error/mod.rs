use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::composer::ComposeError;
use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Compose(#[from] ComposeError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Check if running in production mode (based on RUN_MODE env var)
fn is_production() -> bool {
    std::env::var("RUN_MODE")
        .map(|m| m == "production" || m == "prod")
        .unwrap_or(false)
}

/// Client message for a server-side defect; details only outside production
fn hidden(detail: &str, generic: &str) -> String {
    if is_production() {
        generic.to_string()
    } else {
        detail.to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let log_message = self.to_string();
        let (status, code, client_message) = match &self {
            AppError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                hidden(&log_message, "Configuration error"),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Compose(ComposeError::InvalidPayload { .. }) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                log_message.clone(),
            ),
            AppError::Compose(ComposeError::TemplateNotFound(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TEMPLATE_NOT_FOUND",
                hidden(&log_message, "Template not found"),
            ),
            AppError::Compose(ComposeError::Template(TemplateError::NotFound(_))) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TEMPLATE_NOT_FOUND",
                hidden(&log_message, "Template not found"),
            ),
            AppError::Compose(ComposeError::Template(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TEMPLATE_ERROR",
                hidden(&log_message, "Template error"),
            ),
        };

        // Always log the detailed error server-side
        tracing::error!(
            code = %code,
            status = %status.as_u16(),
            message = %log_message,
            "API error"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: client_message,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let invalid = AppError::from(ComposeError::InvalidPayload {
            kind: "welcome".to_string(),
            reason: "missing field".to_string(),
        });
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let unknown = AppError::from(ComposeError::TemplateNotFound("nope".to_string()));
        assert_eq!(
            unknown.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let missing = AppError::from(ComposeError::Template(TemplateError::NotFound(
            "email/envelope.html".to_string(),
        )));
        assert_eq!(
            missing.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let validation = AppError::Validation("kind must not be empty".to_string());
        assert_eq!(validation.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

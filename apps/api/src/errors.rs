use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Provider failures never reach this type: orchestrators degrade to their
/// fallbacks. Only a caller contract violation (bad request body) does.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidBody { status, message } => {
                tracing::debug!("Rejected request body ({status}): {message}");
                let code = match status {
                    StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
                    StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_ENTITY",
                    _ => "VALIDATION_ERROR",
                };
                (status, code, message)
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

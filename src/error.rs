//! Error types for ShareIt.
//!
//! Uses thiserror for ergonomic error definitions that integrate
//! with axum's response system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shareit_models::ValidationError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Caller identity
    #[error("Missing or invalid {0} header")]
    MissingSharer(&'static str),

    #[error("{0}")]
    Forbidden(String),

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotAvailable(String),

    // Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    // External service errors
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 403
            Self::Forbidden(_) => StatusCode::FORBIDDEN,

            // 404
            Self::NotFound(_) => StatusCode::NOT_FOUND,

            // 409
            Self::AlreadyExists(_) | Self::Conflict(_) => StatusCode::CONFLICT,

            // 400
            Self::MissingSharer(_)
            | Self::NotAvailable(_)
            | Self::Validation(_)
            | Self::InvalidInput(_)
            | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,

            // 500
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSharer(_) => "MISSING_SHARER",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::Conflict(_) => "CONFLICT",
            Self::NotAvailable(_) => "NOT_AVAILABLE",
            Self::Validation(ValidationError::UnknownState(_)) => "UNKNOWN_STATE",
            Self::Validation(_) | Self::MalformedRequest(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), cause = code, error = %message, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), cause = code, error = %message, "Request rejected");
        }

        let body = Json(json!({
            "error": message,
            "cause": code,
        }));

        (status, body).into_response()
    }
}

// Constraint violations surface as client errors; everything else is a 500.
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::AlreadyExists(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                Self::Conflict(db_err.message().to_string())
            }
            _ => Self::Database(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            Error::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            Error::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::AlreadyExists("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            Error::NotAvailable("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::from(ValidationError::Blank("name")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn body_carries_error_and_cause() {
        let response = Error::NotFound("User 7 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "User 7 not found");
        assert_eq!(body["cause"], "NOT_FOUND");
    }
}

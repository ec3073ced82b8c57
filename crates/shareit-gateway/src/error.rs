//! Error types for the gateway.
//!
//! Only requests the gateway refuses itself, or cannot deliver, produce
//! these. Server responses are relayed as they are.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shareit_models::ValidationError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing or invalid {0} header")]
    MissingHeader(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Malformed request body: {0}")]
    InvalidBody(String),

    #[error("ShareIt server unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingHeader(_) | Self::Validation(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingHeader(_) => "MISSING_SHARER",
            Self::Validation(ValidationError::UnknownState(_)) => "UNKNOWN_STATE",
            Self::Validation(_) | Self::InvalidBody(_) => "VALIDATION_ERROR",
            Self::Upstream(_) => "UPSTREAM_ERROR",
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

        (status, Json(json!({ "error": message, "cause": code }))).into_response()
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(err.to_string())
    }
}

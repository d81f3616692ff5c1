use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde_json::json;
use tracing::error;

pub const DUPLICATE_DAY_MESSAGE: &str = "You have already submitted an entry today.";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{}", DUPLICATE_DAY_MESSAGE)]
    DuplicateDay,

    #[error("{0}")]
    Validation(String),

    #[error("failed to read entries: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse entries: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to write entries: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to encode entries: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateDay | StoreError::Validation(_) => {
                Self::bad_request(err.to_string())
            }
            StoreError::Read(_) => {
                error!(error = %err, "entries file unreadable");
                Self::internal("Failed to read entries file.")
            }
            StoreError::Corrupt(_) => {
                error!(error = %err, "entries file corrupt");
                Self::internal("Failed to parse entries file.")
            }
            StoreError::Write(_) | StoreError::Encode(_) => {
                error!(error = %err, "entry not persisted");
                Self::internal("Failed to save entry.")
            }
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

//! Error types for the content backend and the sync client.
//!
//! Backend errors map to HTTP status codes and the `{"success": false, "error": ...}`
//! body the site's admin toolbar reads. Client errors are what a failed load or
//! save reports back to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::WriteOutcome;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
}

/// Backend error type.
#[derive(Debug)]
pub enum AppError {
    /// Authentication required
    Unauthorized(String),
    /// Resource not found
    NotFound(String),
    /// Validation error
    Validation(String),
    /// Database error
    Database(String),
    /// Internal server error
    Internal(String),
    /// Bad request
    BadRequest(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => codes::UNAUTHORIZED,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Database(_) => codes::DATABASE_ERROR,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Database(msg)
            | AppError::Internal(msg)
            | AppError::BadRequest(msg) => msg,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::BadRequest(format!("JSON error: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = WriteOutcome::failed(self.to_string());
        (status, Json(body)).into_response()
    }
}

/// Failure of a fetch or push against the content endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Endpoint unset or still the placeholder; no request was made.
    Configuration(String),
    /// Network unreachable or the request could not complete.
    Transport(String),
    /// Non-success status on read, or `success: false` on write.
    Server {
        status: Option<u16>,
        message: String,
    },
    /// Response body did not have the expected shape.
    Decode(String),
}

pub const GENERIC_SERVER_MESSAGE: &str = "The content server rejected the request";
pub const GENERIC_TRANSPORT_MESSAGE: &str =
    "Could not reach the content server. Check your internet connection.";

impl SyncError {
    pub fn message(&self) -> &str {
        match self {
            SyncError::Configuration(msg)
            | SyncError::Transport(msg)
            | SyncError::Decode(msg) => msg,
            SyncError::Server { message, .. } => message,
        }
    }
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            SyncError::Transport(msg) => write!(f, "transport error: {}", msg),
            SyncError::Server {
                status: Some(status),
                message,
            } => write!(f, "server error ({}): {}", status, message),
            SyncError::Server {
                status: None,
                message,
            } => write!(f, "server error: {}", message),
            SyncError::Decode(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        tracing::warn!("Content endpoint request failed: {:?}", err);
        if err.is_decode() {
            SyncError::Decode(err.to_string())
        } else {
            SyncError::Transport(GENERIC_TRANSPORT_MESSAGE.to_string())
        }
    }
}

//! Error types for mergington-api

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mergington_core::ErrorKind;
use thiserror::Error;

/// Result type alias for mergington-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mergington-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the catalog store
    #[error("Catalog error: {0}")]
    Catalog(#[from] mergington_core::Error),

    /// Path segment could not be decoded
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Query string missing a field or failing to deserialize
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Socket or filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Catalog(err) => match err.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Config { .. } | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing `detail` string.
    pub fn detail(&self) -> String {
        match self {
            Error::Catalog(err) => err.detail().to_string(),
            Error::InvalidPath(message) | Error::InvalidQuery(message) => message.clone(),
            Error::Config { .. } | Error::Io(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        let body = serde_json::json!({ "detail": self.detail() });
        (status, Json(body)).into_response()
    }
}

//! Story server error types.

use std::path::PathBuf;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use exercises_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup errors for the story server.
#[derive(Debug, Error)]
pub enum AppError {
    /// The story file could not be opened.
    #[error("failed to open story file {}: {source}", path.display())]
    StoryFile {
        /// The path from configuration.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The story could not be decoded or the template failed to compile.
    #[error("story error: {0}")]
    Story(#[from] DomainError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "chapter_not_found"),
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            DomainError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "render_error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

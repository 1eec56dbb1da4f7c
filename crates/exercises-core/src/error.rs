//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A named item (chapter, record, ...) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A template, I/O, or other infrastructure failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

//! Centralized error types for Valid-X.

use thiserror::Error;

/// Main error type for Valid-X operations.
///
/// The scorers themselves are total and never produce one of these; errors
/// only arise while loading or validating analysis payloads.
#[derive(Error, Debug)]
pub enum ValidxError {
    #[error("Invalid analysis payload: {0}")]
    InvalidPayload(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Valid-X operations.
pub type ValidxResult<T> = Result<T, ValidxError>;

impl ValidxError {
    /// Create an invalid payload error.
    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        Self::InvalidPayload(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

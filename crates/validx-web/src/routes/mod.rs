//! Route handlers.

pub mod health;
pub mod report;
pub mod score;

use axum::http::StatusCode;
use validx_core::ValidxError;

/// Map a core error onto an HTTP status.
pub(crate) fn error_response(err: ValidxError) -> (StatusCode, String) {
    let status = match err {
        ValidxError::InvalidPayload(_) | ValidxError::Json(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ValidxError::Validation(_) => StatusCode::BAD_REQUEST,
        ValidxError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

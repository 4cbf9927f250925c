//! Error → HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scolaris_core::error::ScolarisError;

use crate::envelope::Envelope;

/// Application-level error for HTTP handlers.
///
/// Wraps the core taxonomy and renders it as an envelope. Only the
/// message string is forwarded; raw store errors never reach the wire.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AppError(#[from] pub ScolarisError);

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ScolarisError::InvalidIdentifier { .. }
            | ScolarisError::MissingField { .. }
            | ScolarisError::InvalidValue { .. } => StatusCode::BAD_REQUEST,
            // Duplicate keys are validation failures with a
            // distinguishing message, not 409s.
            ScolarisError::Duplicate { .. } => StatusCode::BAD_REQUEST,
            ScolarisError::NotFound { .. } => StatusCode::NOT_FOUND,
            ScolarisError::Store(message) => {
                tracing::error!(error = %message, "store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(Envelope::message(self.0.to_string()))).into_response()
    }
}

//! Error types for the SCOLARIS system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScolarisError {
    #[error("Invalid identifier: {value}")]
    InvalidIdentifier { value: String },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Duplicate {entity} {field}")]
    Duplicate {
        entity: &'static str,
        field: &'static str,
    },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Store error: {0}")]
    Store(String),
}

pub type ScolarisResult<T> = Result<T, ScolarisError>;

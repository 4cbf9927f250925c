//! Database-specific error types and conversions.

use scolaris_core::error::ScolarisError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Record decode failed: {0}")]
    Decode(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Duplicate {entity} {field}")]
    Duplicate {
        entity: &'static str,
        field: &'static str,
    },
}

impl From<DbError> for ScolarisError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ScolarisError::NotFound { entity, id },
            DbError::Duplicate { entity, field } => ScolarisError::Duplicate { entity, field },
            other => ScolarisError::Store(other.to_string()),
        }
    }
}

//! Mutation builder error types.

use thiserror::Error;
use trellis_schema::SchemaError;

/// Result type for mutation building.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur while building a mutation document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error("Invalid schema: {0}")]
    InvalidSchema(#[from] SchemaError),

    #[error("Value not representable as a literal: {detail}")]
    Serialization { detail: String },
}

impl MutationError {
    pub fn serialization(detail: impl Into<String>) -> Self {
        Self::Serialization {
            detail: detail.into(),
        }
    }
}

//! Schema error types.

use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors produced by schema boundary validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("Schema name is empty")]
    EmptyName,

    #[error("Invalid schema name: {name}")]
    InvalidName { name: String },

    #[error("Invalid attribute name: {attr} on schema {schema}")]
    InvalidAttributeName { schema: String, attr: String },

    #[error("Duplicate attribute name: {attr} on schema {schema}")]
    DuplicateAttribute { schema: String, attr: String },
}

impl SchemaError {
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    pub fn invalid_attribute_name(schema: impl Into<String>, attr: impl Into<String>) -> Self {
        Self::InvalidAttributeName {
            schema: schema.into(),
            attr: attr.into(),
        }
    }

    pub fn duplicate_attribute(schema: impl Into<String>, attr: impl Into<String>) -> Self {
        Self::DuplicateAttribute {
            schema: schema.into(),
            attr: attr.into(),
        }
    }
}

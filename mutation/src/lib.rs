//! Trellis Mutation
//!
//! Build GraphQL mutation documents from a node schema and a field-value set.
//!
//! Responsibilities:
//! - Render field values as query-language literals (bare object keys,
//!   quoted strings)
//! - Assemble create/update/delete documents with the `{Kind}Create` /
//!   `{name}_create` naming scheme
//! - Validate the schema boundary before any name is spliced into text
//!
//! Node types are defined at runtime by the schema service, so documents are
//! assembled generically here instead of being generated per type at build
//! time. Dispatching the resulting string is the transport's job.

mod builder;
mod error;
mod literal;

pub use builder::{build_create_mutation, build_delete_mutation, build_update_mutation};
pub use error::{MutationError, MutationResult};
pub use literal::render_literal;

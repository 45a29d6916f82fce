//! Trellis Core Types
//!
//! This crate provides the foundational types used throughout the Trellis system:
//! - Value types (the Value enum covering all raw field values)
//! - FieldValues (ordered attribute-name to value sets for mutations)
//! - Conversions from serde_json for callers holding JSON form state

mod fields;
mod value;

pub use fields::*;
pub use value::*;

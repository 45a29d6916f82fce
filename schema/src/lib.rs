//! Trellis Schema
//!
//! Node-type schema descriptions as served by the remote schema service.
//!
//! Responsibilities:
//! - Deserialize schema documents fetched at runtime (node types are not
//!   known at build time)
//! - Validate names at the boundary before they are spliced into generated
//!   request text
//! - Expose attribute kinds as an explicit tag set so downstream builders
//!   can switch on kind rather than inspect raw values

mod error;
mod types;

pub use error::{SchemaError, SchemaResult};
pub use types::{AttrDef, AttrKind, NodeSchema};

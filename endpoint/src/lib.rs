//! Trellis Endpoint
//!
//! Compose fully qualified request URLs for the branch-aware,
//! time-travelling API.
//!
//! Responsibilities:
//! - Resolve the GraphQL endpoint for a branch, optionally scoped to a
//!   historical instant (`?at=<ISO-8601>`)
//! - Resolve schema/diff/config/auth endpoints
//! - Filter and encode optional query-string parameters
//!
//! Everything here is pure string composition; dispatching requests and
//! attaching credentials belong to the transport.

mod config;
mod error;
mod params;
pub mod qsp;

pub use config::{ApiEndpoints, DEFAULT_API_URL};
pub use error::{EndpointError, EndpointResult};
pub use params::with_query_params;

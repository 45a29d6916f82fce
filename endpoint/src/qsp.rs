//! Canonical query-string parameter names.
//!
//! Shared by everything that scopes a request to a branch or an instant, so
//! callers and the resolver agree on spelling.

/// Branch selector parameter.
pub const BRANCH: &str = "branch";

/// Time-travel instant parameter (ISO-8601 timestamp).
pub const AT: &str = "at";

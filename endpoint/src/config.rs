//! API endpoint configuration.

use crate::{EndpointError, EndpointResult};
use chrono::{DateTime, SecondsFormat, Utc};
use url::Url;

/// Environment variable overriding the API server base URL.
const API_URL_ENV: &str = "TRELLIS_API_URL";

/// Default API server base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Branch every request falls back to when no branch is selected.
const DEFAULT_BRANCH: &str = "main";

/// Resolves the endpoints of one API server.
///
/// Every read can be scoped to a named branch and/or a historical instant;
/// the GraphQL endpoint encodes the branch in its path and the instant in
/// an `at` query parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEndpoints {
    base: Url,
}

impl ApiEndpoints {
    /// Create a resolver for the given base URL.
    pub fn new(base: &str) -> EndpointResult<Self> {
        let base = Url::parse(base)
            .map_err(|e| EndpointError::invalid_url(base, e.to_string()))?;
        Ok(Self { base })
    }

    /// Create a resolver from the `TRELLIS_API_URL` environment variable,
    /// falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> EndpointResult<Self> {
        let base = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        tracing::debug!(base = %base, "resolved API base URL");
        Self::new(&base)
    }

    /// The base URL without a trailing slash.
    fn base(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// GraphQL endpoint for a branch, optionally scoped to an instant.
    ///
    /// An omitted or empty branch resolves to `main`. The instant is
    /// serialized as RFC 3339 with millisecond precision and a `Z` suffix,
    /// the format the server expects for `at`.
    pub fn graphql_url(&self, branch: Option<&str>, at: Option<DateTime<Utc>>) -> String {
        let branch = branch.filter(|b| !b.is_empty()).unwrap_or(DEFAULT_BRANCH);
        match at {
            None => format!("{}/graphql/{}", self.base(), branch),
            Some(at) => format!(
                "{}/graphql/{}?at={}",
                self.base(),
                branch,
                at.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
        }
    }

    /// Schema service endpoint, branch-scoped when a branch is given.
    pub fn schema_url(&self, branch: Option<&str>) -> String {
        self.branch_scoped(&format!("{}/schema", self.base()), branch)
    }

    /// Data diff endpoint for a branch.
    pub fn data_diff_url(&self, branch: Option<&str>) -> String {
        self.branch_scoped(&format!("{}/diff/data", self.base()), branch)
    }

    /// File diff endpoint for a branch.
    pub fn files_diff_url(&self, branch: Option<&str>) -> String {
        self.branch_scoped(&format!("{}/diff/files", self.base()), branch)
    }

    /// Schema diff endpoint for a branch.
    pub fn schema_diff_url(&self, branch: Option<&str>) -> String {
        self.branch_scoped(&format!("{}/diff/schema", self.base()), branch)
    }

    /// Server configuration endpoint.
    pub fn config_url(&self) -> String {
        format!("{}/config", self.base())
    }

    /// Sign-in endpoint. Credential handling itself lives in the transport.
    pub fn sign_in_url(&self) -> String {
        format!("{}/auth/login", self.base())
    }

    /// Token refresh endpoint.
    pub fn refresh_token_url(&self) -> String {
        format!("{}/auth/refresh", self.base())
    }

    fn branch_scoped(&self, url: &str, branch: Option<&str>) -> String {
        match branch.filter(|b| !b.is_empty()) {
            Some(branch) => {
                let encoded: String =
                    url::form_urlencoded::byte_serialize(branch.as_bytes()).collect();
                format!("{}?branch={}", url, encoded)
            }
            None => url.to_string(),
        }
    }
}

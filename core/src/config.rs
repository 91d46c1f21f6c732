//! Endpoint configuration, resolved once at startup.
//!
//! Precedence: an explicit override is used verbatim, otherwise the
//! `TASKLIST_API_URL` environment variable, otherwise the local loopback
//! default. Blank values count as unset.

/// Environment variable naming the remote store's base URL.
pub const ENDPOINT_ENV_VAR: &str = "TASKLIST_API_URL";

/// Fallback endpoint when nothing else is configured. Matches the mock
/// server's default port.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Resolve the endpoint from an optional explicit override and the
    /// process environment.
    pub fn resolve(override_url: Option<&str>) -> Self {
        Self::from_sources(override_url, std::env::var(ENDPOINT_ENV_VAR).ok())
    }

    fn from_sources(override_url: Option<&str>, env_url: Option<String>) -> Self {
        let base_url = match override_url {
            Some(url) => url.to_string(),
            None => env_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        };
        Self { base_url }
    }
}

//! Client configuration

use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// API root used when `TABLETOP_API_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Request timeout used when `TABLETOP_REQUEST_TIMEOUT_MS` is unset.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root every endpoint is joined onto (no trailing slash)
    pub api_base_url: String,
    /// Per-request timeout (native transport only)
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// On native targets a `.env` file is read first. In the browser there is
    /// no process environment, so values baked in at compile time are used.
    pub fn from_env() -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| match key {
                "TABLETOP_API_URL" => option_env!("TABLETOP_API_URL").map(str::to_string),
                "TABLETOP_REQUEST_TIMEOUT_MS" => {
                    option_env!("TABLETOP_REQUEST_TIMEOUT_MS").map(str::to_string)
                }
                _ => None,
            })
        })
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = match lookup("TABLETOP_API_URL") {
            Some(raw) => {
                let parsed = Url::parse(raw.trim())
                    .with_context(|| format!("TABLETOP_API_URL is not a valid URL: {raw}"))?;
                parsed.as_str().trim_end_matches('/').to_string()
            }
            None => defaults.api_base_url,
        };

        let request_timeout = match lookup("TABLETOP_REQUEST_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .context("TABLETOP_REQUEST_TIMEOUT_MS must be a number of milliseconds")?,
            ),
            None => defaults.request_timeout,
        };

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }

    /// Absolute URL of an API endpoint.
    ///
    /// ```
    /// use tabletop_player::config::ClientConfig;
    ///
    /// let config = ClientConfig::default();
    /// assert_eq!(config.endpoint("/user"), "http://localhost:8080/api/v1/user");
    /// assert_eq!(config.endpoint("user"), "http://localhost:8080/api/v1/user");
    /// ```
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

//! Client configuration
//!
//! ## Environment Variables
//!
//! - `FORMULA_API_URL` (default: `http://localhost:5002`)
//! - `FORMULA_API_TIMEOUT_SECS` (default: `30`)

use formula_core::{FormError, FormResult};
use std::env;
use std::time::Duration;
use url::Url;

/// Base URL used when `FORMULA_API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:5002";

/// Request timeout used when `FORMULA_API_TIMEOUT_SECS` is not set
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for talking to the form service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root, without a trailing slash
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("formula/{}", crate::VERSION),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> FormResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> FormResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("FORMULA_API_URL") {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(secs) = lookup("FORMULA_API_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                FormError::invalid_config(format!(
                    "FORMULA_API_TIMEOUT_SECS must be a whole number of seconds, got '{secs}'"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Use a different service root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a different request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that the base URL is an http(s) URL and the timeout is non-zero
    pub fn validate(&self) -> FormResult<()> {
        if self.base_url.is_empty() {
            return Err(FormError::invalid_config("API base URL is empty"));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            FormError::invalid_config(format!("invalid API base URL '{}': {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FormError::invalid_config(format!(
                "API base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(FormError::invalid_config("API timeout must be non-zero"));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

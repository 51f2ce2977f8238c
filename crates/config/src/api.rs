//! Remote task service endpoint configuration.
//!
//! This module provides the [`ApiConfig`] type which describes where the
//! task service lives and how long a request may take.
//!
//! # Base URL and API root
//!
//! Endpoints are built as `{base_url}{root}/tasks/...`. Some deployments
//! mount the service under `/api/v1` on the host, others already include
//! that prefix in the base URL. Both are expressed with the single `root`
//! value, which may be empty:
//!
//! ```
//! use tasklet_config::ApiConfig;
//!
//! let mounted = ApiConfig::new("http://localhost:8080", "/api/v1");
//! assert_eq!(
//!     mounted.endpoint("/tasks/recentTasks"),
//!     "http://localhost:8080/api/v1/tasks/recentTasks"
//! );
//!
//! let prefixed = ApiConfig::new("https://tasks.example.com/api/v1/", "");
//! assert_eq!(
//!     prefixed.endpoint("/tasks/recentTasks"),
//!     "https://tasks.example.com/api/v1/tasks/recentTasks"
//! );
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Base URL used when nothing else is configured (local development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default API root under the base URL.
pub const DEFAULT_API_ROOT: &str = "/api/v1";

/// Default request timeout (10 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum allowed request timeout (5 minutes).
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Configuration for the remote task service endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute http(s) URL of the service host.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path prefix under which the task endpoints are mounted.
    #[serde(default = "default_root")]
    pub root: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            root: default_root(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Creates an endpoint configuration with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            root: root.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the root as `""` or `/segment[/segment...]`, without a
    /// trailing slash.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklet_config::ApiConfig;
    ///
    /// assert_eq!(ApiConfig::new("http://h", "api/v1/").normalized_root(), "/api/v1");
    /// assert_eq!(ApiConfig::new("http://h", " / ").normalized_root(), "");
    /// ```
    #[must_use]
    pub fn normalized_root(&self) -> String {
        let trimmed = self.root.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }

    /// Builds the absolute URL for an endpoint path starting with `/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url.trim().trim_end_matches('/'),
            self.normalized_root(),
            path
        )
    }

    /// Validates the endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL with a
    /// host and no query or fragment, or if the timeout is zero or above
    /// [`MAX_TIMEOUT_SECS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklet_config::ApiConfig;
    ///
    /// assert!(ApiConfig::default().validate().is_ok());
    /// assert!(ApiConfig::new("localhost:8080", "").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.base_url)?;

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                reason: "timeout must be at least 1 second".to_string(),
            });
        }
        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                reason: format!(
                    "timeout {}s exceeds maximum of {MAX_TIMEOUT_SECS}s",
                    self.timeout_secs
                ),
            });
        }
        Ok(())
    }
}

fn validate_base_url(url: &str) -> Result<()> {
    let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| invalid("scheme must be http or https"))?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    if trimmed.contains(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }
    if trimmed.contains(['?', '#']) {
        return Err(invalid("must not contain a query or fragment"));
    }
    Ok(())
}

//! Environment variable overrides.
//!
//! Environment variables take precedence over every configuration file:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `TASKLET_API_URL` | `api.base_url` |
//! | `TASKLET_API_ROOT` | `api.root` (may be set to an empty string) |
//! | `TASKLET_RECENT_LIMIT` | `recent_limit` |
//!
//! Empty `TASKLET_API_URL` and `TASKLET_RECENT_LIMIT` values are ignored.

use tracing::debug;

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Overrides the API base URL.
pub const ENV_API_URL: &str = "TASKLET_API_URL";

/// Overrides the API root.
pub const ENV_API_ROOT: &str = "TASKLET_API_ROOT";

/// Overrides the number of recent tasks requested.
pub const ENV_RECENT_LIMIT: &str = "TASKLET_RECENT_LIMIT";

/// Applies overrides from the process environment.
///
/// # Errors
///
/// Returns an error if an override has an unparsable value.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    apply_overrides_from(config, |name| std::env::var(name).ok())
}

/// Applies overrides using the given variable lookup.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvValue`] if `TASKLET_RECENT_LIMIT` is not
/// a non-negative integer.
///
/// # Examples
///
/// ```
/// use tasklet_config::Config;
/// use tasklet_config::env::apply_overrides_from;
///
/// let mut config = Config::default();
/// apply_overrides_from(&mut config, |name| match name {
///     "TASKLET_API_URL" => Some("https://tasks.example.com".to_string()),
///     "TASKLET_API_ROOT" => Some(String::new()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(config.api.base_url, "https://tasks.example.com");
/// assert_eq!(config.api.root, "");
/// ```
pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        debug!(%url, "api base url overridden from environment");
        config.api.base_url = url.trim().to_string();
    }

    if let Some(root) = lookup(ENV_API_ROOT) {
        debug!(%root, "api root overridden from environment");
        config.api.root = root;
    }

    if let Some(raw) = lookup(ENV_RECENT_LIMIT).filter(|v| !v.trim().is_empty()) {
        let limit = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidEnvValue {
                name: ENV_RECENT_LIMIT,
                value: raw.clone(),
            })?;
        debug!(limit, "recent task limit overridden from environment");
        config.recent_limit = limit;
    }

    Ok(())
}

//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the tasklet application.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::ApiConfig;
use crate::env::{apply_env_overrides, apply_overrides_from};
use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Number of recent tasks requested from the service by default.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Largest accepted `recent_limit`.
pub const MAX_RECENT_LIMIT: usize = 100;

/// Default lifetime of the success notice, in seconds.
pub const DEFAULT_NOTICE_SECS: u64 = 3;

/// Largest accepted `notice_secs`.
pub const MAX_NOTICE_SECS: u64 = 60;

/// The main configuration struct for the tasklet application.
///
/// # Examples
///
/// ```
/// use tasklet_config::{ApiConfig, Config};
///
/// let config = Config::default();
/// assert_eq!(config.recent_limit, 5);
/// assert_eq!(config.api.base_url, "http://localhost:8080");
///
/// let config = Config {
///     api: ApiConfig::new("https://tasks.example.com", ""),
///     recent_limit: 20,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the task service lives.
    #[serde(default)]
    pub api: ApiConfig,

    /// How many recent tasks to request when loading the list.
    ///
    /// The list only ever shows the first five incomplete tasks of the
    /// response, so values above five mostly help when several recent tasks
    /// are already completed.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// How long the "Task added successfully!" notice stays visible.
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_notice_secs() -> u64 {
    DEFAULT_NOTICE_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            notice_secs: DEFAULT_NOTICE_SECS,
        }
    }
}

impl Config {
    /// Loads configuration from the default locations and the environment.
    ///
    /// The first file found by [`find_config_file`] is used; without one the
    /// built-in defaults apply. `TASKLET_*` environment variables are
    /// applied on top, then the result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be read
    /// or parsed, if an environment override is malformed, or if the final
    /// configuration is invalid.
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                read_config_file(&path)?
            }
            None => {
                debug!("no config file found, using defaults");
                Self::default()
            }
        };
        apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path` if given, from the default locations
    /// otherwise. Environment overrides apply in both cases.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_or_default_locations(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                let mut config: Config = read_config_file(path)?;
                apply_env_overrides(&mut config)?;
                config.validate()?;
                Ok(config)
            }
            None => Self::load(),
        }
    }

    /// Loads configuration from a specific file, without environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its
    /// content is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tasklet_config::Config;
    ///
    /// # fn example() -> tasklet_config::Result<()> {
    /// let config = Config::load_from("tasklet.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with overrides from `lookup` applied and validated.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is malformed or the result is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklet_config::Config;
    ///
    /// let config = Config::default()
    ///     .with_env_overrides(|name| (name == "TASKLET_RECENT_LIMIT").then(|| "8".to_string()))
    ///     .unwrap();
    /// assert_eq!(config.recent_limit, 8);
    /// ```
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        apply_overrides_from(&mut self, lookup)?;
        self.validate()?;
        Ok(self)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid, if `recent_limit`
    /// exceeds [`MAX_RECENT_LIMIT`] or if `notice_secs` exceeds
    /// [`MAX_NOTICE_SECS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklet_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.recent_limit = 1_000;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;

        if self.recent_limit > MAX_RECENT_LIMIT {
            return Err(ConfigError::InvalidRecentLimit {
                value: self.recent_limit,
                max: MAX_RECENT_LIMIT,
            });
        }
        if self.notice_secs > MAX_NOTICE_SECS {
            return Err(ConfigError::InvalidNoticeDuration {
                value: self.notice_secs,
                max: MAX_NOTICE_SECS,
            });
        }
        Ok(())
    }
}

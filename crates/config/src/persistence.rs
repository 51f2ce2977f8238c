//! Configuration file lookup, reading and writing.
//!
//! Configuration files are JSON5 (comments and trailing commas allowed);
//! plain JSON is accepted as well since it is a subset. Files are written
//! back as pretty-printed JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./tasklet.json5` or `./tasklet.json`
//! 2. User: `{config_dir}/tasklet/config.json5` or `{config_dir}/tasklet/config.json`
//!
//! where `{config_dir}` is the platform configuration directory
//! (`~/.config` on Linux).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["tasklet.json5", "tasklet.json"];

/// Application directory name under the platform config and data dirs.
const APP_DIR: &str = "tasklet";

/// User configuration file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Log file name under the user data directory.
const LOG_FILE_NAME: &str = "tasklet.log";

/// Finds the configuration file for the current working directory and user.
///
/// Returns `None` when no candidate file exists.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Finds the configuration file, looking first in `local_dir` and then in
/// `{user_config_dir}/tasklet/`.
///
/// # Examples
///
/// ```
/// use tasklet_config::persistence::find_config_file_in;
///
/// let dir = tempfile::tempdir().unwrap();
/// assert!(find_config_file_in(dir.path(), None).is_none());
///
/// std::fs::write(dir.path().join("tasklet.json"), "{}").unwrap();
/// assert_eq!(
///     find_config_file_in(dir.path(), None),
///     Some(dir.path().join("tasklet.json"))
/// );
/// ```
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_config_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_config_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(APP_DIR).join(name)));

    let found = local.chain(user).find(|path| path.is_file());
    if let Some(path) = &found {
        debug!(path = %path.display(), "found config file");
    }
    found
}

/// Returns the default log file path (`{data_dir}/tasklet/tasklet.log`).
///
/// # Errors
///
/// Returns an error if the platform data directory cannot be determined.
pub fn default_log_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR).join(LOG_FILE_NAME))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a JSON5 (or JSON) file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes `value` as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written, or if the
/// value cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    std::fs::write(path, content).map_err(write_err)
}

//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The API base URL is not an absolute http(s) URL.
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The request timeout is out of range.
    #[error("invalid request timeout: {reason}")]
    InvalidTimeout {
        /// The reason the timeout is invalid.
        reason: String,
    },

    /// The recent task limit is out of range.
    #[error("invalid recent task limit {value} (maximum is {max})")]
    InvalidRecentLimit {
        /// The configured value.
        value: usize,
        /// The largest accepted value.
        max: usize,
    },

    /// The notice duration is out of range.
    #[error("invalid notice duration {value}s (maximum is {max}s)")]
    InvalidNoticeDuration {
        /// The configured value, in seconds.
        value: u64,
        /// The largest accepted value, in seconds.
        max: u64,
    },

    /// An environment override could not be parsed.
    #[error("invalid value `{value}` for environment variable {name}")]
    InvalidEnvValue {
        /// The variable name.
        name: &'static str,
        /// The raw value.
        value: String,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

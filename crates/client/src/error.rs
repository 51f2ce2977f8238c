//! Error types for remote task service operations.

/// Errors that can occur while talking to the task service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("server returned {status}{}", format_message(.message.as_deref()))]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The `message` field of the server's error body, if any.
        message: Option<String>,
    },

    /// The response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint cannot be used.
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl {
        /// The configured base URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The service is unavailable.
    ///
    /// Produced by the in-process gateway when a failure is injected.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

fn format_message(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}

impl Error {
    /// Returns the HTTP status code if the service answered with one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// A specialized Result type for task service operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Configuration management for the tasklet application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files, environment variables and defaults.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`api`]: Task service endpoint settings
//! - [`env`]: `TASKLET_*` environment overrides
//! - [`persistence`]: Config file lookup, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Highest to lowest:
//!
//! 1. Environment variables (`TASKLET_API_URL`, `TASKLET_API_ROOT`, `TASKLET_RECENT_LIMIT`)
//! 2. Local config (`./tasklet.json5` or `./tasklet.json`)
//! 3. User config (`{config_dir}/tasklet/config.json5` or `.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   api: {
//!     base_url: "http://localhost:8080",
//!     root: "/api/v1",
//!     timeout_secs: 10,
//!   },
//!   recent_limit: 5,
//!   notice_secs: 3,
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use tasklet_config::Config;
//!
//! # fn example() -> tasklet_config::Result<()> {
//! let config = Config::load()?;
//! println!("Talking to {}", config.api.endpoint("/tasks"));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod env;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use api::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, Result};

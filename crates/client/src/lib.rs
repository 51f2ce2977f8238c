//! Remote task service client for tasklet.
//!
//! # Overview
//!
//! - [`gateway`]: The [`TaskGateway`] trait, one method per remote operation
//! - [`http`]: [`HttpGateway`], the reqwest implementation
//! - [`memory`]: [`InMemoryGateway`], an in-process service for tests and demos
//! - [`service`]: [`TaskService`], the logging façade the UI uses
//! - [`error`]: Error types for remote operations
//!
//! # Examples
//!
//! ```no_run
//! use tasklet_client::{HttpGateway, TaskService};
//! use tasklet_config::Config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! let service = TaskService::new(HttpGateway::new(&config.api)?);
//!
//! for task in service.get_recent_tasks(config.recent_limit).await? {
//!     println!("{} {}", task.id, task.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gateway;
pub mod http;
pub mod memory;
pub mod service;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use gateway::TaskGateway;
pub use http::HttpGateway;
pub use memory::{CallCounts, InMemoryGateway, Operation};
pub use service::TaskService;

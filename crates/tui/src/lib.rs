//! Terminal UI for tasklet.
//!
//! This crate provides a Ratatui-based terminal interface with a task
//! creation form next to the list of the most recent incomplete tasks.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`task_list`]: Recent task list state and its transitions
//! - [`form`]: Creation form state
//! - [`effect`]: Remote calls requested by the UI and their results
//! - [`state`]: Application state management
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering of each part of the screen
//!
//! # Example
//!
//! ```no_run
//! use tasklet_client::{HttpGateway, TaskService};
//! use tasklet_config::Config;
//! use tasklet_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let service = TaskService::new(HttpGateway::new(&config.api)?);
//!
//!     terminal::install_panic_hook();
//!     let mut guard = terminal::TerminalGuard::new()?;
//!
//!     let mut app = App::new(service, config);
//!     let result = app.run(&mut guard).await;
//!
//!     guard.restore()?;
//!     result
//! }
//! ```

pub mod app;
pub mod effect;
pub mod event;
pub mod form;
pub mod layout;
pub mod state;
pub mod task_list;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use effect::{Completion, Effect};
pub use form::TaskForm;
pub use state::{AppState, Focus};
pub use task_list::{AddOutcome, TaskListState};

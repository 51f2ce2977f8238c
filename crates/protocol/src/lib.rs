//! Shared protocol types for the tasklet application.
//!
//! This crate defines the core types used across all tasklet components:
//! the task mirrored from the remote service, the create request body,
//! the form draft, and the UI messages.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, the `Task` struct, and `NewTask`
//! - [`draft`]: The unsaved form input and its fields
//! - [`message`]: TUI event messages
//! - [`dummy`]: Sample tasks for tests and demonstrations
//!
//! # Examples
//!
//! Turning a draft into a create request:
//!
//! ```
//! use tasklet_protocol::{Draft, NewTask};
//!
//! let draft = Draft::new("  Buy milk ", "2 litres");
//! assert!(draft.has_title());
//!
//! let body: NewTask = draft.to_new_task();
//! assert_eq!(body.title, "Buy milk");
//! ```

pub mod draft;
pub mod dummy;
pub mod message;
pub mod task;

// Re-export primary types at crate root for convenience
pub use draft::{Draft, DraftField};
pub use message::Message;
pub use task::{NewTask, Task, TaskId};

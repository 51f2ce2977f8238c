//! Widget components for the tasklet TUI.
//!
//! Each widget is a plain function that renders a piece of state into a
//! [`Buffer`](ratatui::buffer::Buffer), which keeps them easy to test and to
//! compose in [`App::view`](crate::App::view).
//!
//! # Modules
//!
//! - [`task_list`]: the recent task list, or its loading / empty placeholder
//! - [`task_card`]: one task with its checkbox
//! - [`form`]: the creation form
//! - [`banner`]: the error banner and the success notice
//! - [`status_bar`]: the footer with keybinding hints
//! - [`help`]: the help overlay
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use tasklet_protocol::dummy::dummy_tasks;
//! use tasklet_tui::task_list::TaskListState;
//! use tasklet_tui::widgets;
//!
//! let list = TaskListState::with_tasks(dummy_tasks());
//!
//! let area = Rect::new(0, 0, 50, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_task_list(&list, Some(0), true, area, &mut buf);
//! ```

pub mod banner;
pub mod form;
pub mod help;
pub mod status_bar;
pub mod task_card;
pub mod task_list;

pub use banner::{render_error_banner, render_notice};
pub use form::render_form;
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
pub use task_card::{CardStatus, render_task_card};
pub use task_list::render_task_list;

//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use tasklet_protocol::Message;
///
/// let msg = Message::Submit;
/// assert!(matches!(msg, Message::Submit));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move focus to the next area (title, description, task list).
    FocusNext,
    /// Move focus to the previous area.
    FocusPrev,
    /// Move selection up within the task list.
    NavigateUp,
    /// Move selection down within the task list.
    NavigateDown,
    /// Type a character into the focused form field.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the focused form field.
    Backspace,
    /// Insert a line break into the focused form field, if it is multi-line.
    Newline,
    /// Submit the creation form.
    Submit,
    /// Mark the selected task as complete.
    CompleteSelected,
    /// Reload the recent tasks from the server.
    Refresh,
    /// Escape: dismiss the banner or notice, or return to the form (contextual).
    Escape,
    /// Toggle help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if this message edits the draft.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklet_protocol::Message;
    ///
    /// assert!(Message::Input { ch: 'a' }.is_edit());
    /// assert!(Message::Newline.is_edit());
    /// assert!(!Message::Submit.is_edit());
    /// ```
    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::Backspace | Self::Newline)
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklet_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

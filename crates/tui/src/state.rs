//! Application state management.
//!
//! This module defines the state the TUI renders: the task list, the
//! creation form, which pane has the focus, the selected task, and the
//! transient overlays (help and success notice).

use std::time::{Duration, Instant};

use tasklet_protocol::{DraftField, Task, TaskId};

use crate::form::TaskForm;
use crate::task_list::TaskListState;

/// Text of the notice shown after a task was created.
pub const TASK_ADDED: &str = "Task added successfully!";

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The form's title field.
    #[default]
    Title,
    /// The form's description field.
    Description,
    /// The form's submit control.
    Submit,
    /// The recent task list.
    List,
}

impl Focus {
    /// The next area in `Title -> Description -> Submit -> List` order,
    /// wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Submit,
            Self::Submit => Self::List,
            Self::List => Self::Title,
        }
    }

    /// The previous area, wrapping.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::List,
            Self::Description => Self::Title,
            Self::Submit => Self::Description,
            Self::List => Self::Submit,
        }
    }

    /// The form field this focus edits, if any.
    #[must_use]
    pub const fn field(self) -> Option<DraftField> {
        match self {
            Self::Title => Some(DraftField::Title),
            Self::Description => Some(DraftField::Description),
            Self::Submit | Self::List => None,
        }
    }

    /// Whether the focus is inside the form, on a field or its submit
    /// control.
    #[must_use]
    pub const fn is_form(self) -> bool {
        !matches!(self, Self::List)
    }
}

/// A message that hides itself after a while.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
    expires_at: Instant,
}

impl Notice {
    /// Creates a notice shown from `now` for `ttl`.
    #[must_use]
    pub fn new(text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: now + ttl,
        }
    }

    /// The notice text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the notice should no longer be shown at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// The application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Recent tasks and request status.
    pub tasks: TaskListState,
    /// The creation form.
    pub form: TaskForm,
    /// Current focus area.
    focus: Focus,
    /// Index of the selected task within the visible tasks, if any.
    pub selected: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The success notice, while shown.
    pub notice: Option<Notice>,
}

impl AppState {
    /// Creates a state with the given task list and an empty form.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklet_tui::task_list::TaskListState;
    /// use tasklet_tui::{AppState, Focus};
    ///
    /// let state = AppState::new(TaskListState::new());
    /// assert_eq!(state.focus(), Focus::Title);
    /// assert!(state.selected.is_none());
    /// ```
    #[must_use]
    pub fn new(tasks: TaskListState) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// The focused area.
    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Moves the focus, keeping the form's input field in step.
    ///
    /// Entering the list selects its first task if nothing is selected.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if let Some(field) = focus.field() {
            self.form.focus_field(field);
        }
        if focus == Focus::List && self.selected.is_none() {
            self.selected = (!self.tasks.visible().is_empty()).then_some(0);
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Moves the selection up among the visible tasks, wrapping to the bottom.
    pub fn navigate_up(&mut self) {
        let len = self.tasks.visible().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx > 0 => idx - 1,
            Some(_) => len - 1,
            None => 0,
        });
    }

    /// Moves the selection down among the visible tasks, wrapping to the top.
    pub fn navigate_down(&mut self) {
        let len = self.tasks.visible().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx + 1 < len => idx + 1,
            Some(_) | None => 0,
        });
    }

    /// Keeps the selection within the visible tasks after the list changed.
    pub fn clamp_selection(&mut self) {
        let len = self.tasks.visible().len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None if self.focus == Focus::List => Some(0),
            None => None,
        };
    }

    /// The selected visible task.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected
            .and_then(|idx| self.tasks.visible().get(idx).copied())
    }

    /// The id of the selected visible task.
    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id.clone())
    }

    /// Shows the task-added notice from `now` for `ttl`.
    pub fn show_notice(&mut self, now: Instant, ttl: Duration) {
        self.notice = Some(Notice::new(TASK_ADDED, now, ttl));
    }

    /// Hides the notice once it has expired.
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }
}

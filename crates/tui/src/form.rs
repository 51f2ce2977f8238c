//! Task creation form state.
//!
//! The form holds the [`Draft`] being typed, which field receives input, and
//! whether a submission is in flight. A submission goes `idle -> submitting
//! -> idle`: [`TaskForm::submit`] hands out the request body and
//! [`TaskForm::finish_submit`] takes the outcome back.

use tasklet_protocol::{Draft, DraftField, NewTask};
use tracing::debug;

use crate::task_list::AddOutcome;

/// Creation form state.
///
/// # Examples
///
/// ```
/// use tasklet_protocol::{DraftField, NewTask, Task};
/// use tasklet_tui::form::TaskForm;
///
/// let mut form = TaskForm::new();
/// form.set_field(DraftField::Title, "  Buy milk ");
///
/// let request = form.submit().unwrap();
/// assert_eq!(request, NewTask::new("Buy milk", ""));
/// assert!(form.submitting());
///
/// form.finish_submit(&Ok(Task::new(1, "Buy milk", "")));
/// assert!(form.draft().is_empty());
/// assert!(!form.submitting());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    draft: Draft,
    field: DraftField,
    submitting: bool,
}

impl TaskForm {
    /// Creates an empty, idle form with the title focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The field receiving input.
    #[must_use]
    pub fn field(&self) -> DraftField {
        self.field
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Whether [`submit`](Self::submit) would produce a request.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.draft.has_title() && !self.submitting
    }

    /// Directs input to `field`.
    pub fn focus_field(&mut self, field: DraftField) {
        self.field = field;
    }

    /// Replaces the value of `field`.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    /// Appends `ch` to the focused field.
    ///
    /// Line breaks are dropped on single-line fields.
    pub fn insert_char(&mut self, ch: char) {
        if matches!(ch, '\n' | '\r') && !self.field.is_multiline() {
            return;
        }
        let mut value = self.draft.field(self.field).to_string();
        value.push(ch);
        self.set_field(self.field, value);
    }

    /// Appends a line break to the focused field if it is multi-line.
    pub fn insert_newline(&mut self) {
        if self.field.is_multiline() {
            self.insert_char('\n');
        }
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        let mut value = self.draft.field(self.field).to_string();
        if value.pop().is_some() {
            self.set_field(self.field, value);
        }
    }

    /// Starts a submission.
    ///
    /// Returns `None`, and changes nothing, when the trimmed title is empty or
    /// a submission is already in flight. Otherwise marks the form as
    /// submitting and returns the trimmed request body.
    #[must_use]
    pub fn submit(&mut self) -> Option<NewTask> {
        if self.submitting {
            debug!("submission already in flight, ignoring");
            return None;
        }
        if !self.draft.has_title() {
            debug!("empty title, ignoring submission");
            return None;
        }
        self.submitting = true;
        Some(self.draft.to_new_task())
    }

    /// Ends a submission.
    ///
    /// A successful outcome resets the draft and puts the focus back on the
    /// title; a failed one leaves the draft as typed.
    pub fn finish_submit(&mut self, outcome: &AddOutcome) {
        if outcome.is_ok() {
            self.draft = Draft::default();
            self.field = DraftField::Title;
        }
        self.submitting = false;
    }
}

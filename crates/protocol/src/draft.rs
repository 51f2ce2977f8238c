//! Unsaved form input for a task being composed.

use serde::{Deserialize, Serialize};

use crate::task::NewTask;

/// Which draft field an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    /// The single-line title.
    #[default]
    Title,
    /// The multi-line description.
    Description,
}

impl DraftField {
    /// Returns `true` if the field accepts line breaks.
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::Description)
    }

    /// Returns the display label for this field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
        }
    }
}

/// Ephemeral, form-local task input.
///
/// # Examples
///
/// ```
/// use tasklet_protocol::{Draft, NewTask};
///
/// let draft = Draft::new("  Watching a movie  ", "");
/// assert!(draft.has_title());
/// assert_eq!(draft.to_new_task(), NewTask::new("Watching a movie", ""));
///
/// assert!(!Draft::new("   ", "details").has_title());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// The title as typed.
    pub title: String,
    /// The description as typed.
    pub description: String,
}

impl Draft {
    /// Creates a draft with the given field values.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns the value of the given field.
    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
        }
    }

    /// Returns a mutable reference to the given field.
    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Description => &mut self.description,
        }
    }

    /// Returns `true` if the title has any non-whitespace content.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Returns `true` if both fields are empty strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }

    /// Builds the create request from this draft, trimming both fields.
    #[must_use]
    pub fn to_new_task(&self) -> NewTask {
        NewTask::new(self.title.trim(), self.description.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_is_empty() {
        let draft = Draft::default();
        assert!(draft.is_empty());
        assert!(!draft.has_title());
    }

    #[test]
    fn whitespace_only_title_is_not_a_title() {
        for title in ["", " ", "\t", "\n  \n"] {
            assert!(!Draft::new(title, "desc").has_title(), "{title:?}");
        }
    }

    #[test]
    fn to_new_task_trims_both_fields() {
        let draft = Draft::new("  Title ", "\n description \t");
        assert_eq!(draft.to_new_task(), NewTask::new("Title", "description"));
    }

    #[test]
    fn field_accessors_address_the_right_value() {
        let mut draft = Draft::new("t", "d");
        assert_eq!(draft.field(DraftField::Title), "t");
        assert_eq!(draft.field(DraftField::Description), "d");

        draft.field_mut(DraftField::Description).push('x');
        assert_eq!(draft.description, "dx");
    }

    #[test]
    fn only_description_is_multiline() {
        assert!(!DraftField::Title.is_multiline());
        assert!(DraftField::Description.is_multiline());
    }
}

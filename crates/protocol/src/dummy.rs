//! Sample data for testing and demonstration.
//!
//! This module provides a fixed set of realistic tasks, ordered
//! most-recent-first the way the remote service returns them, for seeding
//! in-process gateways and exercising the UI.
//!
//! # Examples
//!
//! ```
//! use tasklet_protocol::dummy::dummy_tasks;
//!
//! let tasks = dummy_tasks();
//! assert_eq!(tasks.len(), 8);
//! assert_eq!(tasks.iter().filter(|t| t.completed).count(), 2);
//! ```

use crate::task::{Task, TaskId};

/// A builder for sample tasks.
///
/// Internal helper to reduce boilerplate when creating tasks with a
/// non-default completion flag.
struct TaskBuilder {
    id: TaskId,
    title: String,
    description: String,
    completed: bool,
}

impl TaskBuilder {
    /// Creates a new builder with the given id, title and description.
    fn new(id: i64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: TaskId::from(id),
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Marks the task as completed.
    fn done(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Builds the task.
    fn build(self) -> Task {
        let mut task = Task::new(self.id, self.title, self.description);
        task.completed = self.completed;
        task
    }
}

/// Generates a list of sample tasks, most recent first.
///
/// Ids run from 8 down to 1. Tasks 6 and 3 are completed, so the visible
/// projection of this list is ids 8, 7, 5, 4 and 2.
///
/// # Examples
///
/// ```
/// use tasklet_protocol::TaskId;
/// use tasklet_protocol::dummy::dummy_tasks;
///
/// let tasks = dummy_tasks();
/// assert_eq!(tasks[0].id, TaskId::from(8));
/// assert_eq!(tasks[7].id, TaskId::from(1));
/// ```
#[must_use]
pub fn dummy_tasks() -> Vec<Task> {
    vec![
        TaskBuilder::new(8, "Book dentist appointment", "Ask about the Friday slot").build(),
        TaskBuilder::new(7, "Review pull request", "Parser refactor, focus on error paths")
            .build(),
        TaskBuilder::new(6, "Water the plants", "").done().build(),
        TaskBuilder::new(5, "Plan weekend trip", "Check train times and weather").build(),
        TaskBuilder::new(4, "Renew library books", "").build(),
        TaskBuilder::new(3, "Pay electricity bill", "Due on the 15th").done().build(),
        TaskBuilder::new(2, "Call grandma", "").build(),
        TaskBuilder::new(1, "Clean the garage", "Donate the old bike").build(),
    ]
}

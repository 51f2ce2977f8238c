//! Task-related types shared by the client and the UI.
//!
//! This module defines the task mirrored from the remote service, its
//! server-issued identifier, and the create request body.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-issued identifier for a task.
///
/// The remote service owns identity; the client treats the value as opaque
/// and only uses it as a reconciliation key and as a URL path segment. Both
/// JSON numbers and JSON strings are accepted.
///
/// # Examples
///
/// ```
/// use tasklet_protocol::TaskId;
///
/// let numeric: TaskId = serde_json::from_str("42").unwrap();
/// let text: TaskId = serde_json::from_str(r#""a1b2""#).unwrap();
///
/// assert_eq!(numeric, TaskId::from(42));
/// assert_eq!(text.to_string(), "a1b2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    /// A numeric identifier (the common case for database-backed services).
    Numeric(i64),
    /// Any other identifier, kept verbatim.
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// A task as represented by the remote service.
///
/// Only `completed` ever changes on the client side, and only from `false`
/// to `true`.
///
/// # Examples
///
/// ```
/// use tasklet_protocol::Task;
///
/// let task: Task = serde_json::from_str(
///     r#"{"id": 1, "title": "Task 1", "completed": false}"#,
/// ).unwrap();
///
/// assert_eq!(task.title, "Task 1");
/// assert!(task.description.is_empty());
/// assert!(!task.completed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier assigned by the server on creation.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// Optional free-form details. `null` and missing both decode as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Whether the task has been marked complete.
    #[serde(default)]
    pub completed: bool,
    /// When the server created the task, if it reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates an incomplete task with the given identifier.
    ///
    /// Real tasks come from the server; this constructor exists for sample
    /// data and for in-process gateways.
    #[must_use]
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: None,
        }
    }

    /// Returns a copy of this task with `completed` set.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklet_protocol::Task;
    ///
    /// let task = Task::new(1, "Write report", "");
    /// let done = task.completed();
    /// assert!(done.completed);
    /// assert_eq!(done.id, task.id);
    /// ```
    #[must_use]
    pub fn completed(&self) -> Self {
        Self {
            completed: true,
            ..self.clone()
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The body of a create request.
///
/// Carries exactly the two fields the service accepts, so no other
/// client-side state can leak into the request.
///
/// # Examples
///
/// ```
/// use tasklet_protocol::NewTask;
///
/// let body = NewTask::new("Watching a movie", "");
/// let json = serde_json::to_string(&body).unwrap();
/// assert_eq!(json, r#"{"title":"Watching a movie","description":""}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// The task title.
    pub title: String,
    /// The task description (possibly empty).
    pub description: String,
}

impl NewTask {
    /// Creates a request body from a title and description, verbatim.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

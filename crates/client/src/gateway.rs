//! The remote task gateway abstraction.

use async_trait::async_trait;
use tasklet_protocol::{NewTask, Task, TaskId};

use crate::error::Result;

/// The three operations the task service offers.
///
/// Implementations perform the call and return the raw outcome; logging and
/// recovery belong to the layers above.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Creates a task and returns it as stored by the service.
    async fn create_task(&self, task: &NewTask) -> Result<Task>;

    /// Returns up to `limit` recent tasks, most recent first.
    async fn recent_tasks(&self, limit: usize) -> Result<Vec<Task>>;

    /// Marks a task as completed.
    ///
    /// Returns the updated task when the service sends one back, `None` when
    /// it answers with an empty body.
    async fn complete_task(&self, id: &TaskId) -> Result<Option<Task>>;
}

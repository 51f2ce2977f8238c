//! The task service façade.
//!
//! [`TaskService`] is what the UI talks to. It forwards each call to a
//! [`TaskGateway`], logs failures with the operation name, and hands the
//! error back unchanged.

use std::sync::Arc;

use tasklet_protocol::{NewTask, Task, TaskId};
use tracing::{debug, error, instrument};

use crate::error::Result;
use crate::gateway::TaskGateway;

pub use tasklet_config::config::DEFAULT_RECENT_LIMIT;

/// Logging façade over a [`TaskGateway`].
///
/// Cloning is cheap; clones share the gateway.
///
/// # Examples
///
/// ```
/// use tasklet_client::{InMemoryGateway, TaskService};
/// use tasklet_protocol::NewTask;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> tasklet_client::Result<()> {
/// let service = TaskService::new(InMemoryGateway::new());
/// let task = service.create_task(&NewTask::new("Buy milk", "")).await?;
/// assert!(!task.completed);
///
/// let recent = service.get_recent_tasks(5).await?;
/// assert_eq!(recent, vec![task]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TaskService {
    gateway: Arc<dyn TaskGateway>,
}

impl std::fmt::Debug for TaskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService").finish_non_exhaustive()
    }
}

impl TaskService {
    /// Creates a service over `gateway`.
    #[must_use]
    pub fn new(gateway: impl TaskGateway + 'static) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    /// Creates a service over an already shared gateway.
    #[must_use]
    pub fn from_shared(gateway: Arc<dyn TaskGateway>) -> Self {
        Self { gateway }
    }

    /// Creates a task from exactly `task.title` and `task.description`.
    ///
    /// # Errors
    ///
    /// Returns the gateway error after logging it.
    #[instrument(skip_all)]
    pub async fn create_task(&self, task: &NewTask) -> Result<Task> {
        self.gateway
            .create_task(task)
            .await
            .inspect(|created| debug!(task_id = %created.id, "created task"))
            .inspect_err(|e| error!(operation = "create_task", error = %e, "failed to create task"))
    }

    /// Returns up to `limit` recent tasks, most recent first.
    ///
    /// A `limit` of zero returns an empty list without calling the service.
    ///
    /// # Errors
    ///
    /// Returns the gateway error after logging it.
    #[instrument(skip(self))]
    pub async fn get_recent_tasks(&self, limit: usize) -> Result<Vec<Task>> {
        if limit == 0 {
            debug!("limit is zero, skipping request");
            return Ok(Vec::new());
        }

        let mut tasks = self.gateway.recent_tasks(limit).await.inspect_err(
            |e| error!(operation = "get_recent_tasks", error = %e, "failed to fetch recent tasks"),
        )?;
        tasks.truncate(limit);
        debug!(count = tasks.len(), "fetched recent tasks");
        Ok(tasks)
    }

    /// Marks the task with `id` as completed.
    ///
    /// # Errors
    ///
    /// Returns the gateway error after logging it.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn complete_task(&self, id: &TaskId) -> Result<Option<Task>> {
        self.gateway
            .complete_task(id)
            .await
            .inspect_err(|e| error!(operation = "complete_task", error = %e, "failed to complete task"))
    }
}

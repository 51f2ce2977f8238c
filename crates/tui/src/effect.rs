//! Remote calls requested by the UI and their results.
//!
//! [`App::update`](crate::App::update) never awaits. When a message needs the
//! task service it returns an [`Effect`]; the run loop executes the effect in
//! the background and feeds the resulting [`Completion`] back through
//! [`App::apply`](crate::App::apply).

use tasklet_client::TaskService;
use tasklet_protocol::{NewTask, Task, TaskId};

/// A call to the task service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch up to `limit` recent tasks.
    LoadRecent {
        /// Number of tasks to request.
        limit: usize,
    },
    /// Create a task.
    Create(NewTask),
    /// Mark a task as completed.
    Complete(TaskId),
}

/// The outcome of an [`Effect`].
#[derive(Debug)]
pub enum Completion {
    /// Outcome of [`Effect::LoadRecent`].
    Loaded(tasklet_client::Result<Vec<Task>>),
    /// Outcome of [`Effect::Create`].
    Created(tasklet_client::Result<Task>),
    /// Outcome of [`Effect::Complete`].
    Completed {
        /// The task the request was about.
        id: TaskId,
        /// The service's answer.
        result: tasklet_client::Result<Option<Task>>,
    },
}

impl Effect {
    /// Performs the call against `service`.
    pub async fn run(self, service: &TaskService) -> Completion {
        match self {
            Self::LoadRecent { limit } => Completion::Loaded(service.get_recent_tasks(limit).await),
            Self::Create(task) => Completion::Created(service.create_task(&task).await),
            Self::Complete(id) => {
                let result = service.complete_task(&id).await;
                Completion::Completed { id, result }
            }
        }
    }
}

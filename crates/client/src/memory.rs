//! An in-process task service.
//!
//! [`InMemoryGateway`] behaves like the remote service: it assigns
//! increasing numeric ids, lists recent *incomplete* tasks most recent
//! first, rewrites a non-positive limit to the default, and answers 404 for
//! unknown ids on completion. Failures can be injected per operation and
//! every call is counted, which makes it the workhorse of the workspace
//! tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use tasklet_protocol::{NewTask, Task, TaskId};
use tracing::debug;

use crate::error::{Error, Result};
use crate::gateway::TaskGateway;

/// Limit the service uses when asked for zero tasks.
const SERVER_DEFAULT_LIMIT: usize = 5;

/// One of the three gateway operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `create_task`
    Create,
    /// `recent_tasks`
    Recent,
    /// `complete_task`
    Complete,
}

/// Number of calls received per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    /// Calls to `create_task`.
    pub create: usize,
    /// Calls to `recent_tasks`.
    pub recent: usize,
    /// Calls to `complete_task`.
    pub complete: usize,
}

#[derive(Debug, Default)]
struct Store {
    /// Most recently created first.
    tasks: Vec<Task>,
    next_id: i64,
    calls: CallCounts,
    failing: Vec<Operation>,
    created: Vec<NewTask>,
    completed: Vec<TaskId>,
    return_completed_task: bool,
}

/// In-process stand-in for the remote task service.
///
/// # Examples
///
/// ```
/// use tasklet_client::{InMemoryGateway, TaskGateway};
/// use tasklet_protocol::NewTask;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let gateway = InMemoryGateway::new();
/// let task = gateway.create_task(&NewTask::new("Buy milk", "")).await.unwrap();
/// assert_eq!(gateway.recent_tasks(5).await.unwrap(), vec![task]);
/// # }
/// ```
#[derive(Debug)]
pub struct InMemoryGateway {
    store: Mutex<Store>,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGateway {
    /// Creates an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Creates a service holding `tasks`, given most recent first.
    ///
    /// New ids continue after the largest numeric id present.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let max_id = tasks
            .iter()
            .filter_map(|t| match t.id {
                TaskId::Numeric(id) => Some(id),
                TaskId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);

        Self {
            store: Mutex::new(Store {
                tasks,
                next_id: max_id + 1,
                ..Store::default()
            }),
        }
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Makes every following call of `operation` fail until
    /// [`recover`](Self::recover) is called.
    pub fn fail(&self, operation: Operation) {
        let mut store = self.store();
        if !store.failing.contains(&operation) {
            store.failing.push(operation);
        }
    }

    /// Stops failing `operation`.
    pub fn recover(&self, operation: Operation) {
        self.store().failing.retain(|op| *op != operation);
    }

    /// Makes `complete_task` answer with the updated task instead of an
    /// empty body.
    pub fn return_completed_task(&self, enabled: bool) {
        self.store().return_completed_task = enabled;
    }

    /// Returns how many calls each operation received, including failed ones.
    #[must_use]
    pub fn calls(&self) -> CallCounts {
        self.store().calls
    }

    /// Returns every create request body received, in order.
    #[must_use]
    pub fn created_requests(&self) -> Vec<NewTask> {
        self.store().created.clone()
    }

    /// Returns every id a completion was requested for, in order.
    #[must_use]
    pub fn completion_requests(&self) -> Vec<TaskId> {
        self.store().completed.clone()
    }

    /// Returns a snapshot of all stored tasks, most recent first.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.store().tasks.clone()
    }
}

impl Store {
    fn check(&self, operation: Operation) -> Result<()> {
        if self.failing.contains(&operation) {
            debug!(?operation, "injected failure");
            return Err(Error::Unavailable(format!("{operation:?} failure injected")));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskGateway for InMemoryGateway {
    async fn create_task(&self, task: &NewTask) -> Result<Task> {
        let mut store = self.store();
        store.calls.create += 1;
        store.created.push(task.clone());
        store.check(Operation::Create)?;

        let id = store.next_id;
        store.next_id += 1;

        let mut created = Task::new(id, task.title.clone(), task.description.clone());
        created.created_at = Some(Utc::now());
        store.tasks.insert(0, created.clone());
        Ok(created)
    }

    async fn recent_tasks(&self, limit: usize) -> Result<Vec<Task>> {
        let mut store = self.store();
        store.calls.recent += 1;
        store.check(Operation::Recent)?;

        let limit = if limit == 0 { SERVER_DEFAULT_LIMIT } else { limit };
        Ok(store
            .tasks
            .iter()
            .filter(|t| !t.completed)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn complete_task(&self, id: &TaskId) -> Result<Option<Task>> {
        let mut store = self.store();
        store.calls.complete += 1;
        store.completed.push(id.clone());
        store.check(Operation::Complete)?;

        let return_task = store.return_completed_task;
        let task = store
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| Error::Status {
                status: 404,
                message: Some(format!("Task not found with id: {id}")),
            })?;
        task.completed = true;

        Ok(return_task.then(|| task.clone()))
    }
}

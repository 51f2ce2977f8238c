//! Recent task list state.
//!
//! [`TaskListState`] owns the tasks mirrored from the service together with
//! the loading flag and the error shown to the user. Remote calls are split
//! into a `begin_*` transition, taken before the request is sent, and a
//! `finish_*` transition fed with the request's outcome. Every failure keeps
//! the previous tasks and sets one of the fixed messages below.
//!
//! # Examples
//!
//! ```
//! use tasklet_protocol::{Task, TaskId};
//! use tasklet_tui::task_list::TaskListState;
//!
//! let mut list = TaskListState::new();
//! list.begin_load();
//! assert!(list.loading());
//!
//! list.finish_load(Ok(vec![Task::new(2, "Write report", ""), Task::new(1, "Buy milk", "")]));
//! assert!(!list.loading());
//! assert_eq!(list.visible().len(), 2);
//!
//! assert!(list.begin_complete(&TaskId::from(1)));
//! list.finish_complete(&TaskId::from(1), Ok(None));
//! assert_eq!(list.visible().len(), 1);
//! assert_eq!(list.tasks().len(), 2);
//! ```

use std::collections::HashSet;

use tasklet_protocol::{Task, TaskId};
use tracing::{debug, warn};

/// Maximum number of tasks in the visible projection.
pub const VISIBLE_LIMIT: usize = 5;

/// Shown when loading recent tasks fails.
pub const LOAD_FAILED: &str = "Failed to load tasks";

/// Shown when creating a task fails.
pub const CREATE_FAILED: &str = "Failed to create task";

/// Shown when completing a task fails.
pub const COMPLETE_FAILED: &str = "Failed to complete task";

/// What the creation form gets back after a submission.
///
/// `Ok` carries the task as created by the service, `Err` the message shown
/// to the user.
pub type AddOutcome = Result<Task, String>;

/// Returns the incomplete tasks of `tasks`, in order, capped at
/// [`VISIBLE_LIMIT`].
///
/// # Examples
///
/// ```
/// use tasklet_protocol::dummy::dummy_tasks;
/// use tasklet_protocol::TaskId;
/// use tasklet_tui::task_list::visible_tasks;
///
/// let tasks = dummy_tasks();
/// let ids: Vec<_> = visible_tasks(&tasks).iter().map(|t| t.id.clone()).collect();
/// assert_eq!(ids, [8, 7, 5, 4, 2].map(TaskId::from));
/// ```
#[must_use]
pub fn visible_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| !t.completed)
        .take(VISIBLE_LIMIT)
        .collect()
}

/// Tasks mirrored from the service and the status of requests about them.
#[derive(Debug, Clone, Default)]
pub struct TaskListState {
    tasks: Vec<Task>,
    loading: bool,
    loads_in_flight: usize,
    error: Option<String>,
    completing: HashSet<TaskId>,
}

impl TaskListState {
    /// Creates an empty list that is not loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding `tasks`, most recent first.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// All tasks, including completed ones, most recent first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether a load or a creation is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Whether a load of recent tasks is in flight.
    ///
    /// Unlike [`loading`](Self::loading), a creation finishing in between
    /// does not clear it.
    #[must_use]
    pub fn fetching(&self) -> bool {
        self.loads_in_flight > 0
    }

    /// The message of the last failure, if not cleared since.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a completion request for `id` is in flight.
    #[must_use]
    pub fn is_completing(&self, id: &TaskId) -> bool {
        self.completing.contains(id)
    }

    /// The tasks to display; see [`visible_tasks`].
    #[must_use]
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(&self.tasks)
    }

    /// Marks a load of recent tasks as started.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.loads_in_flight += 1;
    }

    /// Applies the outcome of a load.
    ///
    /// On success the list is replaced and the error cleared; on failure the
    /// list is kept and [`LOAD_FAILED`] is set.
    pub fn finish_load(&mut self, result: tasklet_client::Result<Vec<Task>>) {
        match result {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded recent tasks");
                self.tasks = tasks;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "{LOAD_FAILED}");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        self.loading = false;
        self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
    }

    /// Marks a creation as started.
    pub fn begin_add(&mut self) {
        self.loading = true;
    }

    /// Applies the outcome of a creation and returns it to the caller.
    ///
    /// On success the created task is put first and the error cleared; on
    /// failure the list is kept and [`CREATE_FAILED`] is set and returned.
    pub fn finish_add(&mut self, result: tasklet_client::Result<Task>) -> AddOutcome {
        self.loading = false;
        match result {
            Ok(task) => {
                debug!(task_id = %task.id, "task added");
                self.tasks.insert(0, task.clone());
                self.error = None;
                Ok(task)
            }
            Err(e) => {
                warn!(error = %e, "{CREATE_FAILED}");
                self.error = Some(CREATE_FAILED.to_string());
                Err(CREATE_FAILED.to_string())
            }
        }
    }

    /// Marks a completion of `id` as started.
    ///
    /// Returns `false`, and changes nothing, if a completion of `id` is
    /// already in flight or the task is already completed. Only a `true`
    /// return should be followed by a request.
    #[must_use]
    pub fn begin_complete(&mut self, id: &TaskId) -> bool {
        let already_done = self.tasks.iter().any(|t| &t.id == id && t.completed);
        if already_done || self.completing.contains(id) {
            debug!(task_id = %id, "completion already requested, ignoring");
            return false;
        }
        self.completing.insert(id.clone());
        true
    }

    /// Applies the outcome of completing `id`.
    ///
    /// On success only the task with `id` is marked completed and the error
    /// is cleared; on failure no task changes and [`COMPLETE_FAILED`] is set.
    pub fn finish_complete(&mut self, id: &TaskId, result: tasklet_client::Result<Option<Task>>) {
        self.completing.remove(id);
        match result {
            Ok(_) => {
                for task in self.tasks.iter_mut().filter(|t| &t.id == id) {
                    *task = task.completed();
                }
                debug!(task_id = %id, "task completed");
                self.error = None;
            }
            Err(e) => {
                warn!(task_id = %id, error = %e, "{COMPLETE_FAILED}");
                self.error = Some(COMPLETE_FAILED.to_string());
            }
        }
    }

    /// Clears the error message.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tasklet_client::Error;
    use tasklet_protocol::dummy::dummy_tasks;

    fn unavailable() -> Error {
        Error::Unavailable("down".to_string())
    }

    fn ids(tasks: &[&Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn new_list_is_idle_and_empty() {
        let list = TaskListState::new();
        assert!(list.tasks().is_empty());
        assert!(!list.loading());
        assert!(list.error().is_none());
    }

    #[test]
    fn load_success_replaces_tasks_and_clears_error() {
        let mut list = TaskListState::with_tasks(vec![Task::new(100, "stale", "")]);
        list.finish_load(Err(unavailable()));
        assert_eq!(list.error(), Some(LOAD_FAILED));

        list.begin_load();
        list.finish_load(Ok(dummy_tasks()));

        assert_eq!(list.tasks().len(), 8);
        assert!(list.error().is_none());
        assert!(!list.loading());
    }

    #[test]
    fn load_failure_keeps_tasks() {
        let mut list = TaskListState::with_tasks(dummy_tasks());
        list.begin_load();
        list.finish_load(Err(unavailable()));

        assert_eq!(list.tasks(), dummy_tasks().as_slice());
        assert_eq!(list.error(), Some("Failed to load tasks"));
        assert!(!list.loading());
    }

    #[test]
    fn add_success_prepends() {
        let mut list = TaskListState::with_tasks(dummy_tasks());
        list.begin_add();
        assert!(list.loading());

        let outcome = list.finish_add(Ok(Task::new(9, "new", "")));

        assert_eq!(outcome.map(|t| t.id), Ok(TaskId::from(9)));
        assert_eq!(list.tasks()[0].id, TaskId::from(9));
        assert_eq!(list.tasks().len(), 9);
        assert!(!list.loading());
    }

    #[test]
    fn add_failure_returns_message() {
        let mut list = TaskListState::with_tasks(dummy_tasks());
        list.begin_add();
        let outcome = list.finish_add(Err(unavailable()));

        assert_eq!(outcome, Err("Failed to create task".to_string()));
        assert_eq!(list.error(), Some(CREATE_FAILED));
        assert_eq!(list.tasks().len(), 8);
        assert!(!list.loading());
    }

    #[test]
    fn failed_add_during_load_keeps_fetching() {
        let mut list = TaskListState::new();
        list.begin_load();
        list.begin_add();
        let _ = list.finish_add(Err(unavailable()));

        assert!(!list.loading());
        assert!(list.fetching());

        list.finish_load(Ok(dummy_tasks()));
        assert!(!list.fetching());
        assert_eq!(list.tasks().len(), 8);
    }

    #[test]
    fn complete_does_not_touch_loading() {
        let mut list = TaskListState::with_tasks(dummy_tasks());
        assert!(list.begin_complete(&TaskId::from(8)));
        assert!(!list.loading());
        assert!(list.is_completing(&TaskId::from(8)));

        list.finish_complete(&TaskId::from(8), Ok(None));
        assert!(!list.is_completing(&TaskId::from(8)));
        assert!(!list.loading());
    }

    #[test]
    fn complete_failure_changes_no_task() {
        let mut list = TaskListState::with_tasks(dummy_tasks());
        assert!(list.begin_complete(&TaskId::from(7)));
        list.finish_complete(&TaskId::from(7), Err(unavailable()));

        assert_eq!(list.tasks(), dummy_tasks().as_slice());
        assert_eq!(list.error(), Some(COMPLETE_FAILED));
        assert!(!list.is_completing(&TaskId::from(7)));
    }

    #[test]
    fn duplicate_completion_is_refused() {
        let mut list = TaskListState::with_tasks(dummy_tasks());
        assert!(list.begin_complete(&TaskId::from(5)));
        assert!(!list.begin_complete(&TaskId::from(5)));

        list.finish_complete(&TaskId::from(5), Ok(None));
        assert!(!list.begin_complete(&TaskId::from(5)));
    }

    #[test]
    fn completed_task_leaves_visible_set_but_stays_in_list() {
        let mut list = TaskListState::with_tasks(dummy_tasks());
        assert!(list.begin_complete(&TaskId::from(4)));
        list.finish_complete(&TaskId::from(4), Ok(None));

        assert_eq!(ids(&list.visible()), [8, 7, 5, 2, 1].map(TaskId::from));
        assert!(list.tasks().iter().any(|t| t.id == TaskId::from(4)));
    }

    #[test]
    fn success_clears_previous_error() {
        let mut list = TaskListState::with_tasks(dummy_tasks());
        let _ = list.finish_add(Err(unavailable()));
        assert!(list.error().is_some());

        assert!(list.begin_complete(&TaskId::from(2)));
        list.finish_complete(&TaskId::from(2), Ok(None));
        assert!(list.error().is_none());
    }

    #[test]
    fn dismiss_error_keeps_tasks() {
        let mut list = TaskListState::with_tasks(dummy_tasks());
        list.finish_load(Err(unavailable()));
        list.dismiss_error();
        assert!(list.error().is_none());
        assert_eq!(list.tasks().len(), 8);
    }

    fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
        prop::collection::vec((any::<bool>(), "[a-z]{1,8}"), 0..20).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (completed, title))| {
                    let mut task = Task::new(i as i64, title, "");
                    task.completed = completed;
                    task
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn visible_is_incomplete_prefix_in_order(tasks in arb_tasks()) {
            let visible = visible_tasks(&tasks);
            let incomplete: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();

            prop_assert!(visible.len() <= VISIBLE_LIMIT);
            prop_assert!(visible.iter().all(|t| !t.completed));
            prop_assert_eq!(visible.len(), incomplete.len().min(VISIBLE_LIMIT));
            prop_assert_eq!(&visible[..], &incomplete[..visible.len()]);
        }

        #[test]
        fn visible_is_idempotent(tasks in arb_tasks()) {
            let once: Vec<Task> = visible_tasks(&tasks).into_iter().cloned().collect();
            let twice: Vec<Task> = visible_tasks(&once).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn completion_changes_only_target(tasks in arb_tasks(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!tasks.is_empty());
            let target = tasks[pick.index(tasks.len())].id.clone();

            let mut list = TaskListState::with_tasks(tasks.clone());
            let _ = list.begin_complete(&target);
            list.finish_complete(&target, Ok(None));

            for (before, after) in tasks.iter().zip(list.tasks()) {
                if before.id == target {
                    prop_assert!(after.completed);
                    prop_assert_eq!(&before.title, &after.title);
                } else {
                    prop_assert_eq!(before, after);
                }
            }
            prop_assert_eq!(list.tasks().len(), tasks.len());
        }
    }
}

//! HTTP implementation of [`TaskGateway`].
//!
//! The service exposes three JSON endpoints under `{base_url}{root}/tasks`:
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | create | `POST` | `/tasks/createTask` |
//! | recent | `GET` | `/tasks/recentTasks?limit=N` |
//! | complete | `PUT` | `/tasks/{id}/complete` |
//!
//! Non-success responses are mapped to [`Error::Status`], carrying the
//! `message` field of the service's error body when there is one.

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, Response, header};
use serde::Deserialize;
use tasklet_config::ApiConfig;
use tasklet_protocol::{NewTask, Task, TaskId};
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::gateway::TaskGateway;

/// Characters left untouched when an id is placed in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Gateway talking to the task service over HTTP.
///
/// # Examples
///
/// ```
/// use tasklet_client::HttpGateway;
/// use tasklet_config::ApiConfig;
///
/// let gateway = HttpGateway::new(&ApiConfig::default()).unwrap();
/// assert_eq!(
///     gateway.recent_tasks_url(5),
///     "http://localhost:8080/api/v1/tasks/recentTasks?limit=5"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    api: ApiConfig,
}

impl HttpGateway {
    /// Creates a gateway for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if the endpoint configuration is
    /// invalid, or [`Error::Transport`] if the HTTP client cannot be built.
    pub fn new(api: &ApiConfig) -> Result<Self> {
        api.validate().map_err(|e| Error::InvalidBaseUrl {
            url: api.base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(api.timeout())
            .user_agent(concat!("tasklet/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(base_url = %api.base_url, root = %api.normalized_root(), "created HTTP gateway");
        Ok(Self {
            client,
            api: api.clone(),
        })
    }

    /// Returns the endpoint configuration.
    #[must_use]
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// URL of the create endpoint.
    #[must_use]
    pub fn create_task_url(&self) -> String {
        self.api.endpoint("/tasks/createTask")
    }

    /// URL of the recent tasks endpoint for `limit`.
    #[must_use]
    pub fn recent_tasks_url(&self, limit: usize) -> String {
        format!("{}?limit={limit}", self.api.endpoint("/tasks/recentTasks"))
    }

    /// URL of the complete endpoint for `id`, with the id percent-encoded.
    ///
    /// ```
    /// use tasklet_client::HttpGateway;
    /// use tasklet_config::ApiConfig;
    /// use tasklet_protocol::TaskId;
    ///
    /// let gateway = HttpGateway::new(&ApiConfig::new("http://h", "")).unwrap();
    /// assert_eq!(
    ///     gateway.complete_task_url(&TaskId::from("a/b c")),
    ///     "http://h/tasks/a%2Fb%20c/complete"
    /// );
    /// ```
    #[must_use]
    pub fn complete_task_url(&self, id: &TaskId) -> String {
        let id = id.to_string();
        let segment = utf8_percent_encode(&id, PATH_SEGMENT);
        self.api.endpoint(&format!("/tasks/{segment}/complete"))
    }
}

#[async_trait]
impl TaskGateway for HttpGateway {
    #[instrument(skip_all, fields(title = %task.title))]
    async fn create_task(&self, task: &NewTask) -> Result<Task> {
        let response = self
            .client
            .post(self.create_task_url())
            .header(header::ACCEPT, "application/json")
            .json(task)
            .send()
            .await?;
        let body = success_body(response).await?;
        let created: Task = serde_json::from_slice(&body)?;
        debug!(task_id = %created.id, "task created");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn recent_tasks(&self, limit: usize) -> Result<Vec<Task>> {
        let response = self
            .client
            .get(self.recent_tasks_url(limit))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        let body = success_body(response).await?;
        let tasks: Vec<Task> = serde_json::from_slice(&body)?;
        debug!(count = tasks.len(), "fetched recent tasks");
        Ok(tasks)
    }

    #[instrument(skip(self), fields(task_id = %id))]
    async fn complete_task(&self, id: &TaskId) -> Result<Option<Task>> {
        let response = self
            .client
            .put(self.complete_task_url(id))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        let body = success_body(response).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            debug!("task completed, no body returned");
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&body)?))
    }
}

/// The error body the service sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Extracts a human readable message from an error response body.
fn error_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed
        .message
        .filter(|m| !m.trim().is_empty())
        .or(parsed.error.filter(|e| !e.trim().is_empty()))
}

/// Returns the body of a success response, or the status error otherwise.
async fn success_body(response: Response) -> Result<Vec<u8>> {
    let status = response.status();
    let body = response.bytes().await?;
    if status.is_success() {
        return Ok(body.to_vec());
    }
    Err(Error::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

//! HTTP client for the Todoist REST and Sync APIs

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use todoist_export_common::{
    join_url, truncate_string, COMPLETED_PAGE_LIMIT, DEFAULT_TIMEOUT_SECS, REST_API_BASE_URL,
    SYNC_API_BASE_URL,
};
use tracing::debug;

use crate::config::Credential;
use crate::error::{ExportError, Result};
use crate::models::{Comment, CompletedTask, Label, Project, Section, Task};
use crate::source::RecordSource;

/// Longest error body quoted in an API error message
const MAX_ERROR_BODY: usize = 160;

/// Blocking Todoist API client
#[derive(Debug, Clone)]
pub struct TodoistClient {
    http: Client,
    credential: Credential,
    rest_base_url: String,
    sync_base_url: String,
    page_limit: usize,
}

#[derive(Debug, Deserialize)]
struct CompletedPage {
    #[serde(default)]
    items: Vec<CompletedTask>,
}

impl TodoistClient {
    /// Create a client against the public Todoist endpoints
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be configured
    pub fn new(credential: Credential) -> Result<Self> {
        Self::with_timeout(credential, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom per-request timeout
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be configured
    pub fn with_timeout(credential: Credential, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExportError::configuration(format!("failed to configure HTTP client: {e}")))?;

        Ok(Self {
            http,
            credential,
            rest_base_url: REST_API_BASE_URL.to_string(),
            sync_base_url: SYNC_API_BASE_URL.to_string(),
            page_limit: COMPLETED_PAGE_LIMIT,
        })
    }

    /// Point the client at different REST and Sync base URLs
    #[must_use]
    pub fn with_base_urls(mut self, rest: impl Into<String>, sync: impl Into<String>) -> Self {
        self.rest_base_url = rest.into();
        self.sync_base_url = sync.into();
        self
    }

    /// Override the completed tasks page size
    #[must_use]
    pub fn with_page_limit(mut self, limit: usize) -> Self {
        self.page_limit = limit.clamp(1, COMPLETED_PAGE_LIMIT);
        self
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = join_url(base, path);
        debug!("GET {url} {query:?}");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.credential.expose())
            .query(query)
            .send()
            .map_err(|e| ExportError::network(format!("request to {url} failed: {e}")))?;

        let response = Self::check_status(response)?;
        response
            .json::<T>()
            .map_err(|e| ExportError::decode(format!("{url}: {e}")))
    }

    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().map_or_else(
            |_| "(failed to read error response body)".to_string(),
            |content| truncate_string(content.trim(), MAX_ERROR_BODY),
        );
        Err(ExportError::api(status.as_u16(), body))
    }
}

impl RecordSource for TodoistClient {
    fn get_projects(&self) -> Result<Vec<Project>> {
        self.get_json(&self.rest_base_url, "projects", &[])
    }

    fn get_tasks(&self) -> Result<Vec<Task>> {
        self.get_json(&self.rest_base_url, "tasks", &[])
    }

    fn get_completed_tasks(&self) -> Result<Vec<CompletedTask>> {
        let mut all = Vec::new();
        let mut offset = 0;

        loop {
            let page: CompletedPage = self.get_json(
                &self.sync_base_url,
                "completed/get_all",
                &[
                    ("limit", self.page_limit.to_string()),
                    ("offset", offset.to_string()),
                ],
            )?;
            let fetched = page.items.len();
            debug!("Fetched {fetched} completed tasks at offset {offset}");
            all.extend(page.items);

            if fetched < self.page_limit {
                break;
            }
            offset += fetched;
        }

        Ok(all)
    }

    fn get_labels(&self) -> Result<Vec<Label>> {
        self.get_json(&self.rest_base_url, "labels", &[])
    }

    fn get_sections(&self, project_id: &str) -> Result<Vec<Section>> {
        self.get_json(
            &self.rest_base_url,
            "sections",
            &[("project_id", project_id.to_string())],
        )
    }

    fn get_comments(&self, task_id: &str) -> Result<Vec<Comment>> {
        self.get_json(
            &self.rest_base_url,
            "comments",
            &[("task_id", task_id.to_string())],
        )
    }
}

use crate::{CliClientResult, ClientError, ProjectFields};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde_json::Value;

/// The gateway on its default port
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8082";

/// HTTP client for the project REST API (directly or through the gateway)
pub struct Client {
    pub base_url: String,
    pub user_id: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8082")
    /// * `user_id` - Optional user ID to include in X-User-Id header
    pub fn new(base_url: &str, user_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a URL from path segments and query pairs. Segments are
    /// percent-encoded one by one, so a user-supplied ID can never add or
    /// remove a path level.
    #[track_caller]
    fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> CliClientResult<Url> {
        let invalid = |message: String| ClientError::InvalidUrl {
            url: self.base_url.clone(),
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(invalid(format!("invalid path segment '{}'", bad)));
        }

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Build a request with optional user ID header
    #[track_caller]
    fn request(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> CliClientResult<reqwest::RequestBuilder> {
        let url = self.url(segments, query)?;
        let mut req = self.client.request(method, url);

        if let Some(ref user_id) = self.user_id {
            req = req.header("X-User-Id", user_id);
        }

        Ok(req)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        // Error envelope: {"error": {"code", "message"}}
        let envelope = serde_json::from_str::<Value>(&text).ok();
        let error = envelope.as_ref().and_then(|body| body.get("error"));

        match error {
            Some(error) => {
                let code = error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN");
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error");
                Err(ClientError::api_error(code, message))
            }
            None => Err(ClientError::api_error(
                format!("HTTP_{}", status.as_u16()),
                if text.is_empty() {
                    status.to_string()
                } else {
                    text
                },
            )),
        }
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// Create a new project
    pub async fn create_project(&self, fields: &ProjectFields<'_>) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, &["project", "create"], &[])?
            .json(fields);
        self.execute(req).await
    }

    /// Partially update a project
    pub async fn update_project(
        &self,
        id: &str,
        fields: &ProjectFields<'_>,
    ) -> CliClientResult<Value> {
        let req = self
            .request(Method::PUT, &["project", "update"], &[("projectId", id)])?
            .json(fields);
        self.execute(req).await
    }

    /// List all projects
    pub async fn list_projects(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["project", "all"], &[])?;
        self.execute(req).await
    }

    /// List projects with the given status
    pub async fn list_projects_by_status(&self, status: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["project", "getByStatus", status], &[])?;
        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["project", id], &[])?;
        self.execute(req).await
    }

    /// Set a project's status
    pub async fn update_project_status(&self, id: &str, status: &str) -> CliClientResult<Value> {
        let req = self.request(
            Method::PUT,
            &["project", "UpdateStatus"],
            &[("projectId", id), ("status", status)],
        )?;
        self.execute(req).await
    }

    /// Set a project ACTIVE
    pub async fn activate_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::PATCH, &["project", "activate", id], &[])?;
        self.execute(req).await
    }

    /// Set a project INACTIVE
    pub async fn deactivate_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::PATCH, &["project", "deactivate", id], &[])?;
        self.execute(req).await
    }
}

//! API client for communicating with the sprintboard backend.
//!
//! Two layers per resource: `try_*` methods surface failures as
//! [`ApiError`] values, while the plain methods preserve the original
//! frontend contract of swallowing failures into sentinel values (empty
//! list for collections, `None` for single resources) after logging them.
//! With the sentinel layer, callers cannot distinguish "no data" from
//! "request failed" without the logs; callers that need to distinguish use
//! the `try_*` layer.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::auth::SessionStore;
use crate::models::{Profile, Project, Sprint, User};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the sprintboard backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
///
/// Wire compatibility constraints preserved from the existing backend
/// contract (do not "fix" these without a coordinated backend change):
///
/// - The `Authorization` header carries the bare token, not a
///   `Bearer <token>` scheme.
/// - [`ApiClient::profile`] sends the credential it is given as an
///   argument, not the stored one; callers pass the right value.
/// - [`ApiClient::users`] sends no `Authorization` header at all. It hits
///   an admin-scoped endpoint; whether the omission is intentional is an
///   open question against the backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    api_root: String,
    store: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a new API client against `api_root` (e.g. `http://host:port`),
    /// reading credentials from `store`.
    pub fn new(api_root: impl Into<String>, store: Arc<SessionStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_root: api_root.into(),
            store,
        })
    }

    fn credential(&self) -> Result<String, ApiError> {
        self.store.credential().ok_or(ApiError::MissingCredential)
    }

    /// Single GET with optional raw-token auth, parsed as JSON.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        credential: Option<&str>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.api_root, path);

        let mut request = self.client.get(&url);
        if let Some(token) = credential {
            request = request.header(header::AUTHORIZATION, token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    // ===== Result layer =====

    /// Fetch all projects visible to the current session.
    pub async fn try_projects(&self) -> Result<Vec<Project>, ApiError> {
        let credential = self.credential()?;
        self.get_json("/api/projects", Some(&credential)).await
    }

    /// Fetch a single project by id.
    pub async fn try_project(&self, id: &str) -> Result<Project, ApiError> {
        let credential = self.credential()?;
        self.get_json(&format!("/api/project/{}", id), Some(&credential))
            .await
    }

    /// Fetch a single sprint by id.
    pub async fn try_sprint(&self, id: &str) -> Result<Sprint, ApiError> {
        let credential = self.credential()?;
        self.get_json(&format!("/api/sprint/{}", id), Some(&credential))
            .await
    }

    /// Fetch the profile for `credential`. The caller supplies the header
    /// value; the stored token is not consulted.
    pub async fn try_profile(&self, credential: &str) -> Result<Profile, ApiError> {
        self.get_json("/api/profile", Some(credential)).await
    }

    /// Fetch the admin user list. Deliberately unauthenticated; see the
    /// type-level notes.
    pub async fn try_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/api/admin/users", None).await
    }

    // ===== Sentinel layer =====

    /// Fetch all projects, or an empty list on any failure.
    pub async fn projects(&self) -> Vec<Project> {
        match self.try_projects().await {
            Ok(projects) => projects,
            Err(e) => {
                warn!(endpoint = "/api/projects", error = %e, "Request failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// Fetch a project by id, or `None` on any failure.
    pub async fn project(&self, id: &str) -> Option<Project> {
        match self.try_project(id).await {
            Ok(project) => Some(project),
            Err(e) => {
                warn!(endpoint = "/api/project", id, error = %e, "Request failed");
                None
            }
        }
    }

    /// Fetch a sprint by id, or `None` on any failure.
    pub async fn sprint(&self, id: &str) -> Option<Sprint> {
        match self.try_sprint(id).await {
            Ok(sprint) => Some(sprint),
            Err(e) => {
                warn!(endpoint = "/api/sprint", id, error = %e, "Request failed");
                None
            }
        }
    }

    /// Fetch the profile for `credential`, or `None` on any failure.
    pub async fn profile(&self, credential: &str) -> Option<Profile> {
        match self.try_profile(credential).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(endpoint = "/api/profile", error = %e, "Request failed");
                None
            }
        }
    }

    /// Fetch the admin user list, or `None` on any failure.
    pub async fn users(&self) -> Option<Vec<User>> {
        match self.try_users().await {
            Ok(users) => Some(users),
            Err(e) => {
                warn!(endpoint = "/api/admin/users", error = %e, "Request failed");
                None
            }
        }
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! REST access to the registry backend
//!
//! [`Backend`] is one method per endpoint and reports every failure.
//! [`Gateway`] sits in front of it: failures are logged and routed to the
//! matching error page, then handed back already reported so the caller
//! can keep its cache or show the server's text.

use crate::config::Config;
use crate::surface::{ErrorPage, Route, Surface};
use crate::types::{
    Extension, ExtensionEnvelope, ExtensionRequest, ExtensionUpdateRequest, ExtensionsEnvelope,
    Item, ItemEnvelope, ItemRequest, ItemUpdateRequest, ItemsEnvelope, Project, ProjectEnvelope,
    ProjectRequest, ProjectUpdateRequest, ProjectsEnvelope, Scope,
};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Failure talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// No response at all
    #[error("no connection to the registry backend: {0}")]
    Transport(String),
    /// Non-success HTTP status
    #[error("registry backend answered {code}: {message}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body text
        message: String,
    },
    /// Response body did not match the expected shape
    #[error("unexpected response from the registry backend: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Status code used to pick the error page (0 = no connection)
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Transport(_) => 0,
            Self::Status { code, .. } => *code,
            Self::Decode(_) => ErrorPage::Unknown.code(),
        }
    }

    /// Error page for this failure
    #[must_use]
    pub fn page(&self) -> ErrorPage {
        ErrorPage::from_status(self.status_code())
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status {
                code: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            Self::Transport(e.to_string())
        }
    }
}

// =============================================================================
// Backend
// =============================================================================

/// One method per registry endpoint
///
/// Writes return the HTTP status of a successful (2xx) response so callers
/// can insist on `204 No Content`.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /items`
    async fn list_items(&self) -> Result<Option<Vec<Item>>, GatewayError>;
    /// `POST /items`
    async fn create_item(&self, request: &ItemRequest) -> Result<Item, GatewayError>;
    /// `PUT /items/{id}`
    async fn update_item(&self, id: i64, request: &ItemUpdateRequest) -> Result<StatusCode, GatewayError>;
    /// `DELETE /items/{id}`
    async fn delete_item(&self, id: i64) -> Result<StatusCode, GatewayError>;

    /// `GET /extensions` or `GET /extensions/{scope}`
    async fn list_extensions(&self, scope: Option<Scope>) -> Result<Option<Vec<Extension>>, GatewayError>;
    /// `POST /extensions`
    async fn create_extension(&self, request: &ExtensionRequest) -> Result<Extension, GatewayError>;
    /// `PUT /extensions/{id}`
    async fn update_extension(&self, id: i64, request: &ExtensionUpdateRequest) -> Result<StatusCode, GatewayError>;
    /// `DELETE /extensions/{id}`
    async fn delete_extension(&self, id: i64) -> Result<StatusCode, GatewayError>;

    /// `GET /projects`
    async fn list_projects(&self) -> Result<Option<Vec<Project>>, GatewayError>;
    /// `POST /projects`
    async fn create_project(&self, request: &ProjectRequest) -> Result<Project, GatewayError>;
    /// `PUT /projects/{id}`
    async fn update_project(&self, id: i64, request: &ProjectUpdateRequest) -> Result<StatusCode, GatewayError>;
    /// `DELETE /projects/{id}`
    async fn delete_project(&self, id: i64) -> Result<StatusCode, GatewayError>;
}

/// [`Backend`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    items_path: &'static str,
}

impl HttpBackend {
    /// Build a client for the configured backend
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            items_path: if config.legacy_item_details { "items/details" } else { "items" },
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Send and turn non-2xx statuses into errors carrying the body text
    async fn send(request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_string());
        Err(GatewayError::Status {
            code: status.as_u16(),
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = Self::send(self.client.get(self.url(path))).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, GatewayError> {
        let response = Self::send(self.client.post(self.url(path)).json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    async fn status<B: Serialize + Sync>(&self, method: Method, path: &str, body: Option<&B>) -> Result<StatusCode, GatewayError> {
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(Self::send(request).await?.status())
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_items(&self) -> Result<Option<Vec<Item>>, GatewayError> {
        let envelope: ItemsEnvelope = self.get(self.items_path).await?;
        Ok(envelope.items)
    }

    async fn create_item(&self, request: &ItemRequest) -> Result<Item, GatewayError> {
        let envelope: ItemEnvelope = self.post("items", request).await?;
        Ok(envelope.item)
    }

    async fn update_item(&self, id: i64, request: &ItemUpdateRequest) -> Result<StatusCode, GatewayError> {
        self.status(Method::PUT, &format!("items/{id}"), Some(request)).await
    }

    async fn delete_item(&self, id: i64) -> Result<StatusCode, GatewayError> {
        self.status::<()>(Method::DELETE, &format!("items/{id}"), None).await
    }

    async fn list_extensions(&self, scope: Option<Scope>) -> Result<Option<Vec<Extension>>, GatewayError> {
        let path = match scope {
            Some(scope) => format!("extensions/{scope}"),
            None => "extensions".to_string(),
        };
        let envelope: ExtensionsEnvelope = self.get(&path).await?;
        Ok(envelope.extensions)
    }

    async fn create_extension(&self, request: &ExtensionRequest) -> Result<Extension, GatewayError> {
        let envelope: ExtensionEnvelope = self.post("extensions", request).await?;
        Ok(envelope.extension)
    }

    async fn update_extension(&self, id: i64, request: &ExtensionUpdateRequest) -> Result<StatusCode, GatewayError> {
        self.status(Method::PUT, &format!("extensions/{id}"), Some(request)).await
    }

    async fn delete_extension(&self, id: i64) -> Result<StatusCode, GatewayError> {
        self.status::<()>(Method::DELETE, &format!("extensions/{id}"), None).await
    }

    async fn list_projects(&self) -> Result<Option<Vec<Project>>, GatewayError> {
        let envelope: ProjectsEnvelope = self.get("projects").await?;
        Ok(envelope.projects)
    }

    async fn create_project(&self, request: &ProjectRequest) -> Result<Project, GatewayError> {
        let envelope: ProjectEnvelope = self.post("projects", request).await?;
        Ok(envelope.project)
    }

    async fn update_project(&self, id: i64, request: &ProjectUpdateRequest) -> Result<StatusCode, GatewayError> {
        self.status(Method::PUT, &format!("projects/{id}"), Some(request)).await
    }

    async fn delete_project(&self, id: i64) -> Result<StatusCode, GatewayError> {
        self.status::<()>(Method::DELETE, &format!("projects/{id}"), None).await
    }
}

// =============================================================================
// Gateway
// =============================================================================

/// Failure boundary in front of a [`Backend`]
#[derive(Clone)]
pub struct Gateway {
    backend: Arc<dyn Backend>,
    surface: Arc<dyn Surface>,
}

impl Gateway {
    /// Wrap a backend; failures are routed to `surface`
    pub fn new(backend: Arc<dyn Backend>, surface: Arc<dyn Surface>) -> Self {
        Self { backend, surface }
    }

    fn report(&self, operation: &str, error: &GatewayError) {
        tracing::error!("{} failed: {}", operation, error);
        self.surface.navigate(Route::error(error.page()));
    }

    fn settle<T>(&self, operation: &str, result: Result<T, GatewayError>) -> Result<T, GatewayError> {
        if let Err(e) = &result {
            self.report(operation, e);
        }
        result
    }

    /// All items; `Ok(None)` when the backend has none yet
    ///
    /// A failure is already reported when it comes back; callers keep
    /// whatever they had cached.
    pub async fn items(&self) -> Result<Option<Vec<Item>>, GatewayError> {
        let result = self.backend.list_items().await;
        if result.is_ok() {
            tracing::debug!("fetched items");
        }
        self.settle("list items", result)
    }

    /// Extensions, all or of one scope; `Ok(None)` when the backend has none yet
    pub async fn extensions(&self, scope: Option<Scope>) -> Result<Option<Vec<Extension>>, GatewayError> {
        let result = self.backend.list_extensions(scope).await;
        if result.is_ok() {
            tracing::debug!("fetched extensions of scope {}", scope.map_or("any", |s| s.as_str()));
        }
        self.settle("list extensions", result)
    }

    /// All projects; `Ok(None)` when the backend has none yet
    pub async fn projects(&self) -> Result<Option<Vec<Project>>, GatewayError> {
        let result = self.backend.list_projects().await;
        self.settle("list projects", result)
    }

    /// Create an item
    pub async fn create_item(&self, request: &ItemRequest) -> Result<Item, GatewayError> {
        let result = self.backend.create_item(request).await;
        if result.is_ok() {
            tracing::info!("created item with name {}", request.name);
        }
        self.settle("create item", result)
    }

    /// Update an item's name and table
    pub async fn update_item(&self, id: i64, request: &ItemUpdateRequest) -> Result<StatusCode, GatewayError> {
        let result = self.backend.update_item(id, request).await;
        self.settle("update item", result)
    }

    /// Delete an item
    pub async fn delete_item(&self, id: i64) -> Result<StatusCode, GatewayError> {
        let result = self.backend.delete_item(id).await;
        if matches!(result, Ok(StatusCode::NO_CONTENT)) {
            tracing::info!("deleted item with id {}", id);
        }
        self.settle("delete item", result)
    }

    /// Create an extension
    pub async fn create_extension(&self, request: &ExtensionRequest) -> Result<Extension, GatewayError> {
        let result = self.backend.create_extension(request).await;
        if result.is_ok() {
            tracing::info!("created extension with name {}", request.name);
        }
        self.settle("create extension", result)
    }

    /// Update an extension's name and/or description
    pub async fn update_extension(&self, id: i64, request: &ExtensionUpdateRequest) -> Result<StatusCode, GatewayError> {
        let result = self.backend.update_extension(id, request).await;
        self.settle("update extension", result)
    }

    /// Delete an extension
    pub async fn delete_extension(&self, id: i64) -> Result<StatusCode, GatewayError> {
        let result = self.backend.delete_extension(id).await;
        self.settle("delete extension", result)
    }

    /// Create a project
    pub async fn create_project(&self, request: &ProjectRequest) -> Result<Project, GatewayError> {
        let result = self.backend.create_project(request).await;
        if result.is_ok() {
            tracing::info!("created project with name {}", request.name);
        }
        self.settle("create project", result)
    }

    /// Update a project's name and/or description
    pub async fn update_project(&self, id: i64, request: &ProjectUpdateRequest) -> Result<StatusCode, GatewayError> {
        let result = self.backend.update_project(id, request).await;
        self.settle("update project", result)
    }

    /// Delete a project
    pub async fn delete_project(&self, id: i64) -> Result<StatusCode, GatewayError> {
        let result = self.backend.delete_project(id).await;
        self.settle("delete project", result)
    }
}

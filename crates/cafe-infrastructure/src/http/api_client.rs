// ============================================================================
// Café Infrastructure - HTTP API Client
// File: crates/cafe-infrastructure/src/http/api_client.rs
// ============================================================================
//! JSON-over-HTTP client shared by every repository

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

use cafe_core::error::{ApiError, ClientError};
use cafe_core::EntityId;
use cafe_shared::config::ApiSettings;
use cafe_shared::utils::{join_url, mask_token};

/// Bearer token shared between clones of the same client
pub type TokenHandle = Arc<RwLock<Option<String>>>;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: TokenHandle,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install or remove the token sent as `Authorization: Bearer ...`.
    pub fn set_token(&self, token: Option<String>) {
        match &token {
            Some(t) => debug!(token = %mask_token(t), "API token set"),
            None => debug!("API token cleared"),
        }
        *self.token.write() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Send one request and decode the JSON answer.
    ///
    /// An empty success body decodes to `Value::Null`. A non-success status
    /// becomes `ClientError::Api` carrying the body's `error` field, or a
    /// generic message when there is none.
    pub async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, ClientError> {
        let url = join_url(&self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.token() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            ClientError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let error = api_error(status.as_u16(), &text);
            warn!("{} {} returned {}: {}", method, url, status.as_u16(), error.message);
            return Err(ClientError::Api(error));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!("{} {} returned a non-JSON body: {}", method, url, e);
            ClientError::InvalidResponse(format!("Response is not JSON: {}", e))
        })
    }

    pub async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.request(Method::DELETE, path, None).await
    }
}

fn api_error(status: u16, body: &str) -> ApiError {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .filter(|msg| !msg.is_empty())
        .map(|msg| ApiError::new(msg, status))
        .unwrap_or_else(|| ApiError::generic(status))
}

/// Serialize a request payload.
pub(crate) fn to_body<T: serde::Serialize>(payload: &T) -> Result<Value, ClientError> {
    serde_json::to_value(payload).map_err(|e| ClientError::Validation(format!("Failed to encode request: {}", e)))
}

/// Id of a record the caller is about to update or delete.
pub(crate) fn require_id<'a>(id: Option<&'a EntityId>, kind: &str) -> Result<&'a EntityId, ClientError> {
    id.ok_or_else(|| ClientError::Validation(format!("{} has no id", kind)))
}

//! The API client: one request pipeline for the whole application.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

use propkit_auth::AuthContext;

use crate::envelope;
use crate::error::ApiError;
use crate::interceptor::ResponseInterceptor;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds an [`ApiClient`].
///
/// The base address is fixed at construction (per deployment, not a
/// runtime setting) and the auth context is injected explicitly so the
/// pipeline can be assembled differently in tests.
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Duration,
    auth: Arc<AuthContext>,
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    pub fn new(base_url: impl Into<String>, auth: Arc<AuthContext>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            auth,
            interceptors: Vec::new(),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Append a response stage. Stages run in registration order
    /// against every response.
    pub fn with_interceptor(mut self, stage: Arc<dyn ResponseInterceptor>) -> Self {
        self.interceptors.push(stage);
        self
    }

    pub fn build(self) -> Result<ApiClient, ApiError> {
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;
        Ok(ApiClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            auth: self.auth,
            interceptors: self.interceptors,
        })
    }
}

/// The sole channel through which the UI talks to the backend.
///
/// Credential attachment and authorization-failure handling are
/// centralized here: the current token is read from the auth context
/// at call time (never cached), and every response status runs through
/// the interceptor stack before the caller sees the result. No call
/// path bypasses this — the typed endpoints in [`crate::resources`]
/// all funnel through [`ApiClient::execute`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: Arc<AuthContext>,
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Decode(format!("request body did not encode: {e}")))?;
        self.execute(Method::POST, path, Some(body)).await
    }

    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Decode(format!("request body did not encode: {e}")))?;
        self.execute(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::DELETE, path, None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let mut request = self.http.request(method.clone(), &url);
        // Authorization is attached iff a session exists *right now*;
        // a cleared session stops authenticating from the next call on.
        if let Some(token) = self.auth.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();

        for stage in &self.interceptors {
            stage.on_status(status);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(%method, %url, "request rejected: session no longer valid");
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            let message =
                envelope::error_message(&body, "Your session has expired. Please sign in again.");
            return Err(ApiError::Unauthorized { message });
        }

        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            let message = envelope::error_message(&body, "The request could not be completed.");
            tracing::warn!(%method, %url, %status, "request failed");
            return Err(ApiError::Api { status, message });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("response body was not valid JSON: {e}")))
    }
}

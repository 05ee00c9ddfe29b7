//! Data-access façade.
//!
//! Every HTTP call the stores make funnels through [`ApiClient`], which
//! normalizes success and failure into the uniform [`ApiResult`] shape.
//! Façade operations never return `Err`; consumers branch solely on
//! [`ApiResult::ok`].

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::http_client::{HttpAuth, HttpClient, HttpMethod, HttpRequest};
use crate::session::CredentialStore;

/// Base endpoint used when `JOBDECK_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Payload message substituted when a failure carries no usable body.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred while processing your request";

/// Fixed façade configuration: base target and per-request timeout budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("JOBDECK_BASE_URL")
                .unwrap_or_else(|_| String::from(DEFAULT_BASE_URL)),
            timeout_ms: 3_000,
        }
    }
}

/// Per-call request options: header overrides merged after the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }
}

/// Uniform result shape returned by every façade operation.
///
/// `ok` is true if and only if the transport delivered a 2xx response.
/// `payload` is always present; failures default to an error-description
/// object carrying [`DEFAULT_ERROR_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResult {
    pub payload: Value,
    pub status_code: u16,
    pub ok: bool,
}

impl ApiResult {
    /// The `message` field of the payload, when present.
    pub fn message(&self) -> Option<&str> {
        self.payload.get("message").and_then(Value::as_str)
    }
}

/// Unwrap a response body per the server's loose envelope convention.
///
/// Contract, applied in two steps:
/// 1. an object carrying a non-null `data` field yields that field;
/// 2. anything else yields the value itself, with `null` replaced by an
///    empty object so the payload is never absent.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Null => Value::Object(Map::new()),
        Value::Object(mut map) => match map.remove("data") {
            Some(inner) if !inner.is_null() => inner,
            Some(inner) => {
                map.insert(String::from("data"), inner);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}

fn parse_body(body: &str) -> Option<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Non-JSON bodies are surfaced verbatim as a string payload.
    Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(body.to_owned())))
}

fn default_error_payload() -> Value {
    json!({ "message": DEFAULT_ERROR_MESSAGE })
}

/// The single funnel through which all HTTP calls pass.
///
/// Holds no mutable state across calls; the session credential is read from
/// the injected store on every outgoing request.
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    credentials: Arc<dyn CredentialStore>,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(
        http: Arc<dyn HttpClient>,
        credentials: Arc<dyn CredentialStore>,
        config: ApiConfig,
    ) -> Self {
        Self {
            http,
            credentials,
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    pub async fn get(&self, path: &str) -> ApiResult {
        self.dispatch(HttpMethod::Get, path, None, RequestOptions::default())
            .await
    }

    pub async fn get_with(&self, path: &str, options: RequestOptions) -> ApiResult {
        self.dispatch(HttpMethod::Get, path, None, options).await
    }

    pub async fn post(&self, path: &str, body: Option<Value>) -> ApiResult {
        self.dispatch(HttpMethod::Post, path, body, RequestOptions::default())
            .await
    }

    pub async fn post_with(&self, path: &str, body: Option<Value>, options: RequestOptions) -> ApiResult {
        self.dispatch(HttpMethod::Post, path, body, options).await
    }

    pub async fn put(&self, path: &str, body: Option<Value>) -> ApiResult {
        self.dispatch(HttpMethod::Put, path, body, RequestOptions::default())
            .await
    }

    pub async fn put_with(&self, path: &str, body: Option<Value>, options: RequestOptions) -> ApiResult {
        self.dispatch(HttpMethod::Put, path, body, options).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult {
        self.dispatch(HttpMethod::Delete, path, None, RequestOptions::default())
            .await
    }

    pub async fn delete_with(&self, path: &str, options: RequestOptions) -> ApiResult {
        self.dispatch(HttpMethod::Delete, path, None, options).await
    }

    fn auth(&self) -> HttpAuth {
        match self.credentials.load() {
            Ok(Some(token)) => HttpAuth::BearerToken(token),
            Ok(None) => HttpAuth::None,
            Err(error) => {
                warn!(%error, "failed to read session credential; sending unauthenticated");
                HttpAuth::None
            }
        }
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> ApiResult {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);

        let mut request = HttpRequest::new(method, url)
            .with_header("content-type", "application/json")
            .with_timeout_ms(self.config.timeout_ms);
        for (name, value) in options.headers {
            request = request.with_header(name, value);
        }
        request = request.with_auth(&self.auth());
        if let Some(body) = body {
            request = request.with_body(body.to_string());
        }

        debug!(%method, path, "dispatching api request");

        match self.http.execute(request).await {
            Ok(response) if response.is_success() => ApiResult {
                payload: unwrap_envelope(parse_body(&response.body).unwrap_or(Value::Null)),
                status_code: response.status,
                ok: true,
            },
            Ok(response) => {
                debug!(status = response.status, path, "api request failed");
                let payload = parse_body(&response.body)
                    .filter(|value| !value.is_null())
                    .map(unwrap_envelope)
                    .unwrap_or_else(default_error_payload);
                ApiResult {
                    payload,
                    status_code: response.status,
                    ok: false,
                }
            }
            Err(error) => {
                warn!(%error, path, "api transport failure");
                ApiResult {
                    payload: default_error_payload(),
                    status_code: 500,
                    ok: false,
                }
            }
        }
    }
}

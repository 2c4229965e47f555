//! reqwest-backed transport.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::Form;
use serde_json::Value;

use backoffice_core::config::ApiConfig;
use backoffice_core::error::ErrorKind;
use backoffice_core::traits::{ApiRequest, ApiTransport, HttpMethod, RequestBody};
use backoffice_core::{AppError, AppResult};

/// Sends requests to the configured base URL over HTTP.
#[derive(Debug)]
pub struct HttpTransport {
    /// Shared connection pool.
    client: reqwest::Client,
    /// Base URL without a trailing slash.
    base_url: String,
    /// Bearer credential.
    token: RwLock<Option<String>>,
}

impl HttpTransport {
    /// Build a transport from the `[api]` section.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Absolute URL for a path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    let message = if err.is_timeout() {
        format!("Request timed out: {err}")
    } else if err.is_connect() {
        format!("Connection failed: {err}")
    } else {
        format!("Request failed: {err}")
    };
    AppError::with_source(ErrorKind::Transport, message, err)
}

#[async_trait]
impl ApiTransport for HttpTransport {
    fn transport_type(&self) -> &str {
        "http"
    }

    fn set_bearer_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = token;
    }

    async fn send(&self, request: ApiRequest) -> AppResult<Value> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, self.url(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(parts) => {
                let form = parts
                    .into_iter()
                    .fold(Form::new(), |form, part| form.text(part.name, part.value));
                builder.multipart(form)
            }
        };

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;

        // Failure envelopes often arrive with 4xx/5xx; only a body that is
        // not JSON at all is a transport failure.
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(body) => Ok(body),
            Err(e) if status.is_success() => Err(AppError::with_source(
                ErrorKind::Decode,
                format!("Response body is not JSON (HTTP {status})"),
                e,
            )),
            Err(_) => Err(AppError::transport(format!(
                "HTTP {status} without a JSON body"
            ))),
        }
    }
}

//! The API client: sends requests and decodes envelopes.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use backoffice_core::error::ErrorKind;
use backoffice_core::traits::{ApiRequest, ApiTransport};
use backoffice_core::types::Page;
use backoffice_core::AppResult;

use crate::envelope::{self, Envelope};

/// What a successful mutation returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// Server message, e.g. "Template deleted successfully".
    pub message: Option<String>,
    /// Payload, if any.
    pub result: Option<Value>,
}

/// Issues authenticated requests and turns envelopes into typed results.
///
/// Cloning is cheap; every clone shares the transport and its credential.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Wire layer.
    transport: Arc<dyn ApiTransport>,
}

impl ApiClient {
    /// Wrap a transport.
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Wrap a transport and attach a bearer token.
    pub fn with_token(transport: Arc<dyn ApiTransport>, token: Option<String>) -> Self {
        transport.set_bearer_token(token);
        Self { transport }
    }

    /// Replace the bearer token on every clone of this client.
    pub fn set_token(&self, token: Option<String>) {
        self.transport.set_bearer_token(token);
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Arc<dyn ApiTransport> {
        &self.transport
    }

    /// Send a request and unwrap the envelope.
    pub async fn call(&self, request: ApiRequest) -> AppResult<Outcome> {
        let method = request.method;
        let path = request.path.clone();
        debug!(
            transport = self.transport.transport_type(),
            %method,
            %path,
            query = request.query.len(),
            "Sending request"
        );

        let body = self.transport.send(request).await.inspect_err(|e| {
            warn!(%method, %path, error = %e, "Request failed");
        })?;

        match Envelope::from_value(body).and_then(Envelope::into_result) {
            Ok((message, result)) => Ok(Outcome { message, result }),
            Err(e) => {
                if e.kind == ErrorKind::Application {
                    warn!(%method, %path, message = %e.message, "Request rejected by server");
                } else {
                    warn!(%method, %path, error = %e, "Unreadable response");
                }
                Err(e)
            }
        }
    }

    /// Send a request whose result must decode as `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, what: &str, request: ApiRequest) -> AppResult<T> {
        let outcome = self.call(request).await?;
        envelope::decode_required(what, outcome.result)
    }

    /// Send a list request. The result may be a page or a bare array; a
    /// bare array becomes a single page.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        what: &str,
        request: ApiRequest,
    ) -> AppResult<Page<T>> {
        let outcome = self.call(request).await?;
        decode_page(what, outcome.result)
    }
}

/// Decode a list result in either shape.
pub fn decode_page<T: DeserializeOwned>(what: &str, result: Option<Value>) -> AppResult<Page<T>> {
    match result {
        Some(Value::Array(items)) => {
            let data: Vec<T> = envelope::decode(what, Value::Array(items))?;
            let count = data.len() as u64;
            Ok(Page::new(data, 1, 1, count))
        }
        Some(value @ Value::Object(_)) => envelope::decode(what, value),
        Some(_) => Err(backoffice_core::AppError::decode(format!(
            "Unexpected {what} shape: expected a page or a list"
        ))),
        None => Err(backoffice_core::AppError::decode(format!(
            "Missing {what} in response"
        ))),
    }
}

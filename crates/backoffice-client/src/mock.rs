//! In-memory transport for development and testing.
//!
//! Serves scripted response bodies keyed by method and path, and records
//! every request it receives so tests can assert on what was sent.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};

use backoffice_core::traits::{ApiRequest, ApiTransport, HttpMethod};
use backoffice_core::{AppError, AppResult};

/// A scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this body.
    Body(Value),
    /// Fail with a transport error.
    Unreachable,
}

/// Mock transport that answers from a script.
///
/// Replies queued for a route are consumed in order; the last one is
/// repeated once the queue has a single entry left. Unscripted routes
/// fail with a transport error.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Scripted replies per `(method, path)`.
    replies: Mutex<HashMap<(HttpMethod, String), VecDeque<MockReply>>>,
    /// Every request received, in order.
    requests: Mutex<Vec<ApiRequest>>,
    /// Current bearer credential.
    token: Mutex<Option<String>>,
}

impl MockTransport {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw reply for a route.
    pub fn script(&self, method: HttpMethod, path: &str, reply: MockReply) {
        let mut replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
        replies
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    /// Queue a success envelope carrying `result`.
    pub fn ok(&self, method: HttpMethod, path: &str, result: impl Serialize) {
        let result = serde_json::to_value(result).unwrap_or(Value::Null);
        self.script(method, path, MockReply::Body(success(result)));
    }

    /// Queue a failure envelope.
    pub fn fail(&self, method: HttpMethod, path: &str, message: &str) {
        self.script(
            method,
            path,
            MockReply::Body(json!({ "isSuccess": false, "message": message, "result": null })),
        );
    }

    /// Queue a transport failure.
    pub fn unreachable(&self, method: HttpMethod, path: &str) {
        self.script(method, path, MockReply::Unreachable);
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Requests received for one route.
    pub fn requests_to(&self, method: HttpMethod, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    /// Number of requests received for one route.
    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        self.requests_to(method, path).len()
    }

    /// Forget recorded requests, keeping the script.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// The bearer token the client attached.
    pub fn bearer_token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// A success envelope around `result`.
pub fn success(result: Value) -> Value {
    json!({ "isSuccess": true, "message": null, "result": result })
}

#[async_trait]
impl ApiTransport for MockTransport {
    fn transport_type(&self) -> &str {
        "mock"
    }

    fn set_bearer_token(&self, token: Option<String>) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = token;
    }

    async fn send(&self, request: ApiRequest) -> AppResult<Value> {
        let key = (request.method, request.path.clone());
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        let reply = {
            let mut replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
            match replies.get_mut(&key) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match reply {
            Some(MockReply::Body(body)) => Ok(body),
            Some(MockReply::Unreachable) => Err(AppError::transport("mock: host unreachable")),
            None => Err(AppError::transport(format!(
                "mock: no reply scripted for {} {}",
                key.0, key.1
            ))),
        }
    }
}

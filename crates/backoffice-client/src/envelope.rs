//! The uniform response envelope `{isSuccess, message, result}`.

use backoffice_core::{AppError, AppResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A decoded envelope with its `result` still untyped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Success flag. Anything but `true` is a failure.
    #[serde(default, alias = "isSucess", alias = "IsSuccess")]
    pub is_success: Option<bool>,
    /// Server message, shown verbatim on failure.
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    /// Payload.
    #[serde(default, alias = "Result")]
    pub result: Option<Value>,
}

impl Envelope {
    /// Parse a response body. A body that is not an envelope object is a
    /// decode error.
    pub fn from_value(body: Value) -> AppResult<Self> {
        if !body.is_object() {
            return Err(AppError::decode("Response body is not an envelope object"));
        }
        serde_json::from_value(body).map_err(|e| {
            AppError::with_source(
                backoffice_core::error::ErrorKind::Decode,
                format!("Malformed envelope: {e}"),
                e,
            )
        })
    }

    /// Whether the backend reported success.
    pub fn succeeded(&self) -> bool {
        self.is_success == Some(true)
    }

    /// Split into the success payload or an application error.
    pub fn into_result(self) -> AppResult<(Option<String>, Option<Value>)> {
        if self.succeeded() {
            Ok((self.message, self.result.filter(|v| !v.is_null())))
        } else {
            Err(AppError::application(self.message))
        }
    }
}

/// Decode a payload into its typed shape.
pub fn decode<T: DeserializeOwned>(what: &str, value: Value) -> AppResult<T> {
    serde_json::from_value(value).map_err(|e| {
        AppError::with_source(
            backoffice_core::error::ErrorKind::Decode,
            format!("Unexpected {what} shape: {e}"),
            e,
        )
    })
}

/// Decode a payload that must be present.
pub fn decode_required<T: DeserializeOwned>(what: &str, value: Option<Value>) -> AppResult<T> {
    match value {
        Some(value) => decode(what, value),
        None => Err(AppError::decode(format!("Missing {what} in response"))),
    }
}

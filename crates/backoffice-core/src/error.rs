//! Unified application error types for the console.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Each panel of the console decides
//! what to show from [`AppError::user_message`].

use std::fmt;
use thiserror::Error;

/// Generic text shown when the server could not be reached.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Unable to reach the server. Please try again.";

/// Generic text shown when the server rejected a request without a message.
pub const APPLICATION_FALLBACK_MESSAGE: &str = "The request could not be completed.";

/// Generic text shown when the server answered with an unexpected shape.
pub const DECODE_FALLBACK_MESSAGE: &str = "Received an unexpected response from the server.";

/// Top-level error kind categorization used across the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// No usable credential is available.
    Authentication,
    /// The local role claim does not allow the requested area.
    Authorization,
    /// Client-side validation failed; nothing was sent.
    Validation,
    /// The server answered with `isSuccess: false`.
    Application,
    /// The request never produced a usable response (network, timeout).
    Transport,
    /// A success envelope carried a result of the wrong shape.
    Decode,
    /// A configuration error occurred.
    Configuration,
    /// A serialization error occurred while building a request.
    Serialization,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Authorization => write!(f, "AUTHORIZATION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Application => write!(f, "APPLICATION"),
            Self::Transport => write!(f, "TRANSPORT"),
            Self::Decode => write!(f, "DECODE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout the console.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create an authorization error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an application error from a failed envelope.
    ///
    /// A missing or blank server message is kept empty so that
    /// [`AppError::user_message`] falls back to the generic text.
    pub fn application(message: Option<String>) -> Self {
        Self::new(
            ErrorKind::Application,
            message
                .map(|m| m.trim().to_string())
                .unwrap_or_default(),
        )
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether this error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    /// The text a panel should display for this error.
    ///
    /// Application errors show the server message verbatim when present,
    /// transport and decode errors show a generic string, everything else
    /// shows its own message.
    pub fn user_message(&self) -> String {
        match self.kind {
            ErrorKind::Application if self.message.is_empty() => {
                APPLICATION_FALLBACK_MESSAGE.to_string()
            }
            ErrorKind::Transport => TRANSPORT_FALLBACK_MESSAGE.to_string(),
            ErrorKind::Decode => DECODE_FALLBACK_MESSAGE.to_string(),
            _ => self.message.clone(),
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_message_verbatim() {
        let err = AppError::application(Some("Template name already exists".into()));
        assert_eq!(err.user_message(), "Template name already exists");
    }

    #[test]
    fn test_application_message_fallback() {
        assert_eq!(
            AppError::application(None).user_message(),
            APPLICATION_FALLBACK_MESSAGE
        );
        assert_eq!(
            AppError::application(Some("   ".into())).user_message(),
            APPLICATION_FALLBACK_MESSAGE
        );
    }

    #[test]
    fn test_transport_is_generic() {
        let err = AppError::transport("connection refused (os error 111)");
        assert_eq!(err.user_message(), TRANSPORT_FALLBACK_MESSAGE);
        assert_eq!(err.to_string(), "TRANSPORT: connection refused (os error 111)");
    }

    #[test]
    fn test_clone_drops_source() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: AppError = json_err.into();
        assert!(err.source.is_some());
        let cloned = err.clone();
        assert!(cloned.source.is_none());
        assert_eq!(cloned.kind, ErrorKind::Serialization);
    }
}

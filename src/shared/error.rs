//! Shared Error Types
//!
//! Error types for talking to the remote phonebook API and for validating
//! form input before a request is made.
//!
//! # Error Categories
//!
//! - `ApiError` - transport and server failures from the persons API
//! - `ValidationError` - empty form fields, rejected before any remote call
//!
//! # Usage
//!
//! ```rust
//! use xfbook::shared::error::ApiError;
//!
//! let error = ApiError::status(404, None);
//! assert!(error.is_not_found());
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and cross the worker-thread boundary
//! inside completion channel payloads.
use thiserror::Error;

/// Failures produced by calls against the remote phonebook API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code of the response
        status: u16,
        /// Parsed `{"error": ...}` payload, when the server attached one
        server_message: Option<String>,
    },

    /// The response body could not be decoded into the expected shape
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Create a new network error
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network(detail.into())
    }

    /// Create a new status error
    pub fn status(status: u16, server_message: Option<String>) -> Self {
        Self::Status {
            status,
            server_message,
        }
    }

    /// Create a new decode error
    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode(detail.into())
    }

    /// True for the 404 class: the target record no longer exists
    /// server-side, usually because another client deleted it.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// The server-provided error message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { server_message, .. } => server_message.as_deref(),
            _ => None,
        }
    }
}

/// Decode failures keep their own variant so callers can tell a broken
/// response apart from an unreachable backend.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

/// A form field failed validation before any remote call was made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("validation error in field '{field}': {message}")]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for an empty field
    pub fn empty(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: "must not be empty".to_string(),
        }
    }
}

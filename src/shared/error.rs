//! Shared Error Types
//!
//! This module defines the error types produced at the sync-engine boundary and
//! by the state machines built on top of it.
//!
//! # Error Categories
//!
//! - `SyncClientError` - a remote call failed (transport or decode)
//! - `TriggerError` - a manual sync trigger was refused or failed
//! - `PollerError` - the refresh controller was misused
//! - `SharedError` - client-side validation failures
//!
//! # Usage
//!
//! ```rust
//! use syncboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("url", "must start with http:// or https://");
//! assert!(error.to_string().contains("url"));
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and `Clone`, so they can be stored in the
//! dashboard snapshot and shared across tasks.
use thiserror::Error;

/// Failure of a single call to the sync engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncClientError {
    /// The request could not be delivered, timed out, or came back non-2xx.
    #[error("{}", transport_display(.status, .message))]
    Transport {
        /// HTTP status when a response was received
        status: Option<u16>,
        /// Diagnostic text (network error or response body)
        message: String,
    },

    /// A response arrived but did not match the expected shape.
    #[error("Unexpected response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },
}

fn transport_display(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Request failed: {} {}", code, message),
        None => format!("Network error: {}", message),
    }
}

impl SyncClientError {
    /// Create a transport error for a request that never produced a response
    pub fn network(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// Create a transport error for a non-2xx response
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Transport {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<reqwest::Error> for SyncClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::Transport {
                status: err.status().map(|s| s.as_u16()),
                message: err.to_string(),
            }
        }
    }
}

/// Why a manual sync trigger did not produce a log entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TriggerError {
    /// Another trigger is still outstanding; nothing was sent.
    #[error("A sync is already in progress")]
    AlreadyInFlight,

    /// The controller has been shut down.
    #[error("Refresh controller has been shut down")]
    ShutDown,

    #[error(transparent)]
    Client(#[from] SyncClientError),
}

/// Refresh controller lifecycle errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PollerError {
    #[error("Poller is already running")]
    AlreadyRunning,

    #[error("Poller has been shut down")]
    ShutDown,
}

/// Client-side validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The human-readable part of the error, without the field prefix
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}

//! Client error types

use std::fmt::Display;

use thiserror::Error;

/// Message used when a failure carries no text of its own
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Message reported when a request exceeds the configured timeout
pub const TIMEOUT_MESSAGE: &str = "Request timeout - please check your connection";

/// Client error type
///
/// `Display` is the user-facing message for every variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Request exceeded the configured timeout
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    /// Server answered with a non-success status
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Network, DNS or connection failure
    #[error("{0}")]
    Transport(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Success response whose body could not be decoded
    #[error("{0}")]
    InvalidResponse(String),

    /// Anything else
    #[error("{0}")]
    Unexpected(String),
}

impl ClientError {
    /// Build a transport error, substituting the generic message for empty text
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport(GENERIC_ERROR_MESSAGE.to_string())
        } else {
            Self::Transport(message)
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        if err.is_decode() {
            return Self::InvalidResponse(err.to_string());
        }
        Self::transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Collapse any failure into the message shown to the user.
///
/// The error's own text is used verbatim; an empty one becomes
/// [`GENERIC_ERROR_MESSAGE`].
pub fn user_message<E: Display + ?Sized>(err: &E) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

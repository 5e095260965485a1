use std::fmt;

use serde::{Deserialize, Serialize};

/// The structured payload a record update service rejects with: an optional
/// human-readable message and an HTTP-style status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: u16,
}

impl ErrorPayload {
    /// Shown to the user when the payload carries no message of its own.
    pub const GENERIC_MESSAGE: &'static str = "Update failed";

    pub fn new(message: impl Into<String>, status: u16) -> Self {
        ErrorPayload {
            message: Some(message.into()),
            status,
        }
    }

    /// A rejection that carries only a status code.
    pub fn status_only(status: u16) -> Self {
        ErrorPayload {
            message: None,
            status,
        }
    }

    /// The message to surface to the user, falling back to
    /// [`GENERIC_MESSAGE`](Self::GENERIC_MESSAGE) when absent.
    pub fn user_message(&self) -> &str {
        self.message.as_deref().unwrap_or(Self::GENERIC_MESSAGE)
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "update rejected ({}): {}", self.status, self.user_message())
    }
}

impl std::error::Error for ErrorPayload {}

/// Failure signal from a record source fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        FetchError {
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record fetch failed: {}", self.message)
    }
}

impl std::error::Error for FetchError {}

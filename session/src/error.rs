//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Views never inspect status codes directly; they call
//! [`ApiError::user_message`] and render a single line. Unauthorized
//! responses have already been acted on by the HTTP pipeline by the time the
//! caller sees them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::{Deserialize, Serialize};

/// Failure below HTTP: the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request could not be built: {0}")]
    Request(String),
    /// No HTTP transport exists on this host (e.g. native builds of the UI).
    #[error("http transport is not available here")]
    Unavailable,
}

/// `message` in the backend error body: a single string or a validation list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    /// The text to show: the string itself, or the first list entry.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::One(message) => Some(message.as_str()),
            Self::Many(messages) => messages.first().map(String::as_str),
        }
    }
}

/// Error body returned by the backend for non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetail {
    pub message: ErrorMessage,
    #[serde(default)]
    pub error: Option<String>,
    pub status_code: u16,
}

/// Error returned by every service call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Non-2xx response; `detail` is present when the body had the error shape.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<ApiErrorDetail> },
    /// 2xx response whose body did not match the expected type.
    #[error("unexpected response body: {0}")]
    Body(String),
}

impl ApiError {
    /// Build a status error, parsing the backend error shape when present.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorDetail>(body).ok();
        Self::Status { status, detail }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// One-line message for the user: the backend message when the error
    /// body carried one, otherwise `default`.
    #[must_use]
    pub fn user_message(&self, default: &str) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail
                .message
                .first()
                .filter(|m| !m.is_empty())
                .unwrap_or(default)
                .to_owned(),
            _ => default.to_owned(),
        }
    }
}

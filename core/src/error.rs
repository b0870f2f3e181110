//! Error types for the Students client.
//!
//! # Design
//! Two failure families reach callers through the same type: `Transport`
//! when the exchange never completed, and `Status` when the server answered
//! with a non-2xx code. `Status` displays its message verbatim so front ends
//! can show the server's own text unchanged.

use thiserror::Error;

/// Errors returned by the client, transport and facade.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be completed (DNS, refused connection, bad URL).
    #[error("{0}")]
    Transport(String),

    /// The server responded with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("invalid response payload: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

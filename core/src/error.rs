//! Error types for the task-list client.
//!
//! # Design
//! The user only ever sees a fixed "Failed to ..." message per action (that
//! fold happens in `state`), so these variants exist for the diagnostic log:
//! a transport failure reads differently from a 500 or from a body that
//! would not decode. `NotFound` keeps its own variant because "the task does
//! not exist" is the one status worth telling apart when reading logs.

use std::fmt;

/// Errors produced while building requests, executing them, or parsing
/// responses.
#[derive(Debug)]
pub enum ApiError {
    /// The round trip never produced an HTTP response (connect, DNS, I/O).
    Transport(String),

    /// The server returned 404 — the requested task does not exist.
    NotFound,

    /// The server returned a non-success status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::NotFound => write!(f, "task not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

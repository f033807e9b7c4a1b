//! Error types for the NLP API client.
//!
//! # Design
//! HTTP error statuses (4xx/5xx) are deliberately NOT errors: the service
//! reports semantic failures (invalid label set, text too long) through the
//! status code and a JSON body, and both ride back to the caller inside the
//! normal `Envelope`. Only failures that prevent an envelope from existing at
//! all — the transport broke, the payload would not serialize, the body was
//! not JSON — surface as `ApiError`.

use std::fmt;

/// Errors returned by `NlpCloudClient` build, parse, and call methods.
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP round-trip itself failed (DNS, connection, body read). The
    /// underlying transport error is carried unmodified.
    Transport(reqwest::Error),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The response body was not valid JSON, or `Envelope::decode` was asked
    /// for a shape the data does not match.
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "transport error: {e}"),
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}

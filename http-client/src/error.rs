//! Error types for the HTTP client

use thiserror::Error;

/// Errors that can occur during a REST round trip
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not valid JSON
    #[error("Response parsing error: {0}")]
    Parse(String),
}

impl HttpError {
    /// HTTP status code, when the failure came from the service itself
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

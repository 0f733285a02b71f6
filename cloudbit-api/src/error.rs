use http_client::HttpError;
use thiserror::Error;

/// Machine-readable code carried by [`ApiError::InvalidParameter`]
pub const INVALID_PARAMETER: &str = "Invalid_Parameter";

/// Errors returned by subscription operations
///
/// Validation failures are raised before any request is sent. Anything that
/// goes wrong on the wire is surfaced as `Transport` exactly as the HTTP
/// client reported it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required argument was missing or empty
    #[error("{code}: {detail}")]
    InvalidParameter { code: &'static str, detail: String },

    /// Network failure, non-success status or unparseable body
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The service answered with JSON of an unexpected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an `InvalidParameter` naming the operation and the offending field
    pub fn invalid_parameter(operation: &str, field: &str) -> Self {
        Self::InvalidParameter {
            code: INVALID_PARAMETER,
            detail: format!("NotificationManager::{}: {} cannot be empty", operation, field),
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidParameter { code, .. } => *code,
            ApiError::Transport(_) => "Transport_Error",
            ApiError::Decode(_) => "Decode_Error",
        }
    }

    /// Human-readable detail
    pub fn detail(&self) -> String {
        match self {
            ApiError::InvalidParameter { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors raised while assembling a [`crate::ClientConfig`] from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),
}

//! Error handling

use thiserror::Error;

/// Errors raised by the catalog service client
#[derive(Error, Debug)]
pub enum SDKError {
    /// Client configuration is unusable
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Token endpoint rejected the credentials or returned garbage
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Transport failure before a response arrived
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Service answered with a non-success status
    #[error("API error: HTTP {status}: {body}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body as text
        body: String,
    },

    /// Service answered with no result at all
    #[error("Empty response from catalog service")]
    EmptyResponse,

    /// Response body is not a result object
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// SDK result type
pub type Result<T> = std::result::Result<T, SDKError>;

impl SDKError {
    /// Error
    pub fn is_auth_error(&self) -> bool {
        matches!(self, SDKError::AuthError(_))
            || matches!(self, SDKError::ApiError { status: 401 | 403, .. })
    }

    /// HTTP status, when the service produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            SDKError::ApiError { status, .. } => Some(*status),
            SDKError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

//! API client error types

use thiserror::Error;

/// Errors that can occur when talking to the transactions API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Could not reach the server
    #[error("API unavailable: {0}")]
    Unavailable(String),

    /// The request did not complete in time
    #[error("Request timeout")]
    Timeout,

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// The requested transaction does not exist
    #[error("Transaction not found: {0}")]
    NotFound(i64),
}

impl ApiError {
    /// Classify a reqwest failure the same way for every call
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unavailable(err.to_string())
        } else {
            ApiError::Request(err)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;

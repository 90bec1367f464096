//! Error types for client adapters

#[cfg(feature = "http-client")]
use std::io;

#[cfg(feature = "http-client")]
use thiserror::Error;

#[cfg(feature = "http-client")]
use crate::domain::error::A2uiError;

/// Error type for the HTTP client adapter
#[derive(Error, Debug)]
#[cfg(feature = "http-client")]
pub enum HttpClientError {
    /// Reqwest client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    /// IO error during HTTP operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error during request construction
    #[error("Request error: {0}")]
    Request(String),

    /// Error with HTTP response
    #[error("Response error: {status} - {message}")]
    Response { status: u16, message: String },

    /// Connection timeout
    #[error("Connection timeout")]
    Timeout,
}

// Conversion from adapter errors to domain errors
#[cfg(feature = "http-client")]
impl From<HttpClientError> for A2uiError {
    fn from(error: HttpClientError) -> Self {
        match error {
            HttpClientError::Reqwest(e) => A2uiError::Internal(format!("HTTP client error: {}", e)),
            HttpClientError::Url(e) => A2uiError::InvalidParams(format!("Invalid server URL: {}", e)),
            HttpClientError::Io(e) => A2uiError::Io(e),
            HttpClientError::Request(msg) => {
                A2uiError::Internal(format!("HTTP request error: {}", msg))
            }
            HttpClientError::Response { status, message } => {
                A2uiError::Internal(format!("HTTP response error: {} - {}", status, message))
            }
            HttpClientError::Timeout => A2uiError::Internal("HTTP request timeout".to_string()),
        }
    }
}

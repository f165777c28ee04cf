/*!
 * Error types for the leafscan application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the inference backend
///
/// Application-level rejections (an `error` field inside a successful
/// response, or a non-"success" contact status) are payload data, not
/// `Err` values; only transport-level failures surface here.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Error sending the request or reading the response body
    #[error("Request to backend failed: {0}")]
    Transport(String),

    /// Error when the response body is not the expected JSON shape
    #[error("Failed to parse backend response: {0}")]
    MalformedResponse(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the backend client
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Error in the application configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

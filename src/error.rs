// src/error.rs
//! Failure kinds for the fetch → unwrap → classify pipelines.
//!
//! Front ends never show these to the user directly; they log the detail
//! and collapse it into one static message per pipeline.

/// All errors a sheet pipeline can produce.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not complete (DNS, TLS, connection, body read).
    #[error("HTTP: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Wrapper or document structure did not match.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The unwrapped body was not JSON.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream answered with an error-shaped payload (e.g. unknown tab).
    #[error("Sheet not found: {0}")]
    NotFound(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    ParseFailure,
    NotFound,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network(_) | FetchError::Status(_) => ErrorKind::NetworkFailure,
            FetchError::Parse(_) | FetchError::Json(_) => ErrorKind::ParseFailure,
            FetchError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FetchError>;

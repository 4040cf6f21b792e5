//! Error types for collectors.
//!
//! These never reach the HTTP client: every source converts them into its
//! "unavailable" value and logs them at debug level.

use thiserror::Error;

/// Errors that can occur while querying a data source.
#[derive(Debug, Clone, Error)]
pub enum CollectError {
    /// Binary missing or not executable
    #[error("failed to run `{program}`: {message}")]
    Spawn { program: String, message: String },

    /// Process did not finish in time (it is killed)
    #[error("`{program}` timed out after {seconds}s")]
    Timeout { program: String, seconds: u64 },

    /// Process exited unsuccessfully
    #[error("`{program}` exited with status {code:?}")]
    ExitStatus { program: String, code: Option<i32> },

    /// HTTP request timeout
    #[error("request timeout after {0}s")]
    RequestTimeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Non-success HTTP status
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Output or body did not have the expected shape
    #[error("invalid output: {0}")]
    ParseError(String),
}

impl CollectError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        CollectError::ParseError(message.into())
    }
}

//! CLI error types.

use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum.
#[derive(Debug, Error)]
pub enum CliError {
    /// Server error with user-facing message.
    #[error("{0}")]
    Server(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a server error.
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Server errors: 1
            Self::Server(_) => 1,
            // JSON/format errors: 2
            Self::Json(_) => 2,
        }
    }
}

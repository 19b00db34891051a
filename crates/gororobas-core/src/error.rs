//! Error types and exit codes for gororobas
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed document, unreadable config)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the gororobas CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed document or config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during gororobas operations
#[derive(Error, Debug)]
pub enum GororobasError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid document: {reason}")]
    InvalidDocument { reason: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GororobasError {
    /// Create an error for a document that does not match the schema
    pub fn invalid_document(error: impl std::fmt::Display) -> Self {
        GororobasError::InvalidDocument {
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GororobasError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or option
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GororobasError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GororobasError::UsageError(_)
            | GororobasError::InvalidValue { .. } => ExitCode::Usage,

            GororobasError::InvalidDocument { .. } | GororobasError::InvalidConfig { .. } => {
                ExitCode::Data
            }

            GororobasError::Io(_)
            | GororobasError::Json(_)
            | GororobasError::FailedOperationWithTarget { .. }
            | GororobasError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GororobasError::UsageError(_) => "usage_error",
            GororobasError::InvalidValue { .. } => "invalid_value",
            GororobasError::InvalidDocument { .. } => "invalid_document",
            GororobasError::InvalidConfig { .. } => "invalid_config",
            GororobasError::Io(_) => "io_error",
            GororobasError::Json(_) => "json_error",
            GororobasError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GororobasError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for gororobas operations
pub type Result<T> = std::result::Result<T, GororobasError>;

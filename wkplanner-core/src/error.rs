//! Error types for wkplanner.

use thiserror::Error;

/// Errors that can occur in wkplanner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Malformed user input (form field or query parameter).
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlannerError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PlannerError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for wkplanner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;

//! Error types for the Libris catalog

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid loan: {0}")]
    InvalidLoan(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Whether this error ends the interactive session.
    ///
    /// Business-rule rejections are reported to the operator and the session
    /// continues; storage and encoding failures abort it.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Storage(_) | AppError::Serialization(_))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

//! Error types for tokscan

use thiserror::Error;

/// Main error type for tokscan
///
/// Scanning itself never fails; only reading input and loading tables do.
#[derive(Debug, Error)]
pub enum TokscanError {
    #[error("Invalid lexical tables: {message}")]
    InvalidTables { message: String },

    #[error("Malformed tables document: {0}")]
    TablesFormat(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TokscanError {
    pub fn invalid_tables(message: impl Into<String>) -> Self {
        TokscanError::InvalidTables {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TokscanError>;

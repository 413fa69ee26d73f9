//! Data error types.

use thiserror::Error;

/// Errors raised while reading or preparing the raw retail data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// A source file is missing or cannot be read
    #[error("Data source unavailable: {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },

    /// A record could not be parsed
    #[error("Parse error in {source_name} at line {line}: {reason}")]
    ParseError {
        source_name: String,
        line: u64,
        reason: String,
    },

    /// Date field in an unsupported format
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Store type outside {A, B, C}
    #[error("Invalid store type: {0}")]
    InvalidStoreType(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DataError {
    /// Whether this error means the raw data could not be obtained at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DataError::SourceUnavailable { .. })
    }
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

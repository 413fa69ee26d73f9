//! Inventory policy error types.

use thiserror::Error;

/// Inventory policy errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },
}

impl InventoryError {
    pub fn invalid(name: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

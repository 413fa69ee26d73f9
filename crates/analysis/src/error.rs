//! Analysis error types.

use data_facade::DataError;
use forecast_facade::ForecastError;
use inventory_facade::InventoryError;
use thiserror::Error;

/// Reasons an analysis run produced no report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Raw data missing, unreadable or malformed
    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] DataError),

    /// The selected pair has no sales history
    #[error("No data available for Store {store} | Department {dept}")]
    NoDataForSelection { store: u32, dept: u32 },

    /// Model fit or prediction failed
    #[error("Forecast failed: {0}")]
    ForecastFailed(#[from] ForecastError),

    /// Business inputs rejected before any computation
    #[error("Invalid parameters: {0}")]
    InvalidParameters(#[source] InventoryError),

    /// Policy could not be derived from the forecast
    #[error("Policy calculation failed: {0}")]
    PolicyFailed(#[source] InventoryError),
}

impl AnalysisError {
    /// Whether the caller should fix its inputs rather than the data.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidParameters(_) | AnalysisError::NoDataForSelection { .. }
        )
    }
}

/// Result type for analysis runs.
pub type Result<T> = std::result::Result<T, AnalysisError>;

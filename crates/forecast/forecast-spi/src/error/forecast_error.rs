//! Forecast error types

use thiserror::Error;

/// Errors that can occur while fitting or predicting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A regressor column is absent or has no usable values
    #[error("Missing regressor: {0}")]
    MissingRegressor(String),

    /// Input values the model cannot use
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Prediction requested before fitting
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Columns of different lengths in one frame
    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_insufficient_data_error_message() {
        let error = ForecastError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 2 points, got 1"
        );
    }

    #[test]
    fn test_invalid_parameter_error_message() {
        let error = ForecastError::InvalidParameter {
            name: "interval_width".to_string(),
            reason: "must be in (0, 1)".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'interval_width': must be in (0, 1)"
        );
    }

    #[test]
    fn test_missing_regressor_error_message() {
        let error = ForecastError::MissingRegressor("Temperature".to_string());
        assert_eq!(error.to_string(), "Missing regressor: Temperature");
    }

    #[test]
    fn test_invalid_data_error_message() {
        let error = ForecastError::InvalidData("duplicate date 2010-02-05".to_string());
        assert_eq!(error.to_string(), "Invalid data: duplicate date 2010-02-05");
    }

    #[test]
    fn test_not_fitted_error_message() {
        assert_eq!(
            ForecastError::NotFitted.to_string(),
            "Model must be fitted before prediction"
        );
    }

    #[test]
    fn test_numerical_error_message() {
        let error = ForecastError::NumericalError("matrix is singular".to_string());
        assert_eq!(error.to_string(), "Numerical error: matrix is singular");
    }

    #[test]
    fn test_length_mismatch_error_message() {
        let error = ForecastError::LengthMismatch {
            expected: 10,
            actual: 9,
        };
        assert_eq!(
            error.to_string(),
            "Length mismatch: expected 10 values, got 9"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(ForecastError::NotFitted);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();
    }
}

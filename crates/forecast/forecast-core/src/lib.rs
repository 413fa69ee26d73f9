//! Forecast Core
//!
//! Core implementations for the forecast stage: gap filling, store-type
//! encoding, prediction frames, the seasonal regression forecaster and the
//! adapter tying them to the merged retail series.

pub mod adapter;
pub mod encoding;
pub mod fill;
pub mod future;
pub mod regression;

// Re-export SPI traits for implementations
pub use forecast_spi::{FittedModel, ForecastError, Forecaster, Result};

// Re-export main types
pub use adapter::{ForecastAdapter, ForecastOutcome, FUEL_PRICE, IS_HOLIDAY, SIZE, TEMPERATURE};
pub use encoding::store_type_dummies;
pub use fill::{backward_fill, fill_column, forward_fill};
pub use future::regressors_for_dates;
pub use regression::{SeasonalRegressionForecaster, SeasonalRegressionModel};

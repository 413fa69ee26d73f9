//! Forecast Consumer API
//!
//! Configuration for the forecast adapter and the reference forecaster.

mod config;

pub use config::{ForecastConfig, DEFAULT_HORIZON, FORECAST_CADENCE, FORECAST_SEASONALITY_MODE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecastConfig, DEFAULT_HORIZON, FORECAST_CADENCE, FORECAST_SEASONALITY_MODE};
    pub use forecast_spi::{
        Cadence, FittedModel, ForecastError, ForecastPoint, ForecastResult, Forecaster,
        ModelConfig, Result, SeasonalityMode, TrainingFrame,
    };
}

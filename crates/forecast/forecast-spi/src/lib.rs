//! Forecast Service Provider Interface
//!
//! Defines the forecaster capability (fit, predict, future dates), the frames
//! exchanged with it, and the forecast result consumed downstream.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{FittedModel, Forecaster};
pub use error::{ForecastError, Result};
pub use model::{
    Cadence, Column, ForecastComponents, ForecastPoint, ForecastResult, ModelConfig,
    RegressorFrame, SeasonalityMode, TrainingFrame,
};

//! Model module containing data structures

mod config;
mod forecast;
mod frame;

pub use config::{Cadence, ModelConfig, SeasonalityMode};
pub use forecast::{ForecastComponents, ForecastPoint, ForecastResult};
pub use frame::{Column, RegressorFrame, TrainingFrame};

//! Forecaster trait: the fit half of the fit/predict cycle

use super::FittedModel;
use crate::error::Result;
use crate::model::{ModelConfig, TrainingFrame};

/// A time-series model family that can be fitted to a history
pub trait Forecaster: Send + Sync {
    /// Name of this forecaster
    fn name(&self) -> &str;

    /// Fit to `history` with `config`, returning a model ready to predict
    fn fit(&self, config: &ModelConfig, history: &TrainingFrame) -> Result<Box<dyn FittedModel>>;
}

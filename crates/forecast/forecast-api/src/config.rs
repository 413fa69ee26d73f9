//! Forecast configuration types.

use forecast_spi::{Cadence, ForecastError, ModelConfig, Result, SeasonalityMode};
use serde::{Deserialize, Serialize};

/// Number of future weekly periods forecast past the history.
pub const DEFAULT_HORIZON: usize = 52;

/// Spacing of future dates.
pub const FORECAST_CADENCE: Cadence = Cadence::WEEKLY;

/// Seasonality combination mode of the retail demand model.
pub const FORECAST_SEASONALITY_MODE: SeasonalityMode = SeasonalityMode::Multiplicative;

/// Tuning of the reference forecaster.
///
/// Horizon, cadence and seasonality mode are fixed by the adapter and are
/// not part of the configuration; unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    /// Prediction interval coverage, in (0, 1).
    pub interval_width: f64,
    /// Fourier order of the yearly seasonal term.
    pub yearly_fourier_order: usize,
    /// Ridge penalty applied to the regression coefficients.
    pub regularization: f64,
}

impl ForecastConfig {
    /// Check every field is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.interval_width > 0.0 && self.interval_width < 1.0) {
            return Err(invalid("interval_width", "must be in (0, 1)"));
        }
        if !(self.regularization.is_finite() && self.regularization >= 0.0) {
            return Err(invalid("regularization", "must be finite and non-negative"));
        }
        Ok(())
    }

    /// Model settings used by the adapter: multiplicative yearly
    /// seasonality only, one external regressor per name.
    pub fn model_config(&self, regressors: &[String]) -> ModelConfig {
        ModelConfig {
            seasonality_mode: FORECAST_SEASONALITY_MODE,
            yearly_seasonality: true,
            weekly_seasonality: false,
            daily_seasonality: false,
            regressors: regressors.to_vec(),
            interval_width: self.interval_width,
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            interval_width: 0.8,
            yearly_fourier_order: 10,
            regularization: 0.01,
        }
    }
}

fn invalid(name: &str, reason: &str) -> ForecastError {
    ForecastError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

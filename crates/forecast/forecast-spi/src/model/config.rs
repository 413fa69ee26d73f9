//! Model configuration passed to a forecaster at fit time.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// How seasonal and regressor effects combine with the trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalityMode {
    /// y = trend + effects
    #[default]
    Additive,
    /// y = trend * (1 + effects)
    Multiplicative,
}

/// Fixed spacing between consecutive forecast dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadence {
    days: i64,
}

impl Cadence {
    pub const WEEKLY: Cadence = Cadence { days: 7 };
    pub const DAILY: Cadence = Cadence { days: 1 };

    /// Cadence of `days` days; `None` unless positive.
    pub fn days(days: i64) -> Option<Self> {
        (days > 0).then_some(Self { days })
    }

    pub fn step_days(&self) -> i64 {
        self.days
    }

    /// The date `steps` periods after `from`.
    pub fn advance(&self, from: NaiveDate, steps: i64) -> NaiveDate {
        from + Duration::days(self.days * steps)
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::WEEKLY
    }
}

/// Settings a forecaster is fitted with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub seasonality_mode: SeasonalityMode,
    pub yearly_seasonality: bool,
    pub weekly_seasonality: bool,
    pub daily_seasonality: bool,
    /// External regressor names, in column order
    pub regressors: Vec<String>,
    /// Probability mass covered by the prediction interval
    pub interval_width: f64,
}

impl ModelConfig {
    /// Register an external regressor.
    pub fn add_regressor(&mut self, name: impl Into<String>) {
        self.regressors.push(name.into());
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            seasonality_mode: SeasonalityMode::Additive,
            yearly_seasonality: true,
            weekly_seasonality: false,
            daily_seasonality: false,
            regressors: Vec::new(),
            interval_width: 0.8,
        }
    }
}

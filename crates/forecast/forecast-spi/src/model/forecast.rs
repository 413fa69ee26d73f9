//! Forecast output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Additive breakdown of a point estimate.
///
/// In multiplicative mode `yearly` and `extra_regressors` are already
/// expressed in target units (trend times relative effect).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastComponents {
    pub trend: f64,
    pub yearly: f64,
    pub extra_regressors: f64,
}

/// One dated estimate with its prediction interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub yhat: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
    pub components: ForecastComponents,
}

impl ForecastPoint {
    fn clamp_non_negative(&mut self) {
        self.yhat = self.yhat.max(0.0);
        self.yhat_lower = self.yhat_lower.max(0.0);
        self.yhat_upper = self.yhat_upper.max(0.0);
    }
}

/// Estimates over the fitted history followed by the future horizon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub points: Vec<ForecastPoint>,
    /// Number of leading points that cover historical dates
    pub history_len: usize,
    /// Number of trailing points past the last historical date
    pub horizon: usize,
}

impl ForecastResult {
    pub fn new(points: Vec<ForecastPoint>, history_len: usize) -> Self {
        let horizon = points.len().saturating_sub(history_len);
        Self {
            points,
            history_len,
            horizon,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point estimates over the full span.
    pub fn yhat(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.yhat).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn history(&self) -> &[ForecastPoint] {
        &self.points[..self.history_len.min(self.points.len())]
    }

    pub fn future(&self) -> &[ForecastPoint] {
        &self.points[self.history_len.min(self.points.len())..]
    }

    /// Floor every estimate and bound at zero.
    pub fn clamp_non_negative(&mut self) {
        self.points.iter_mut().for_each(ForecastPoint::clamp_non_negative);
    }
}

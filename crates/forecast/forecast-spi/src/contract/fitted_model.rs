//! Fitted model trait: the predict half of the fit/predict cycle

use crate::error::Result;
use crate::model::{Cadence, ForecastPoint, RegressorFrame};
use chrono::NaiveDate;

/// A model fitted to a history
pub trait FittedModel: Send + Sync {
    /// Regressor names the model expects, in column order
    fn regressors(&self) -> &[String];

    /// Dates the model was fitted on, ascending
    fn history_dates(&self) -> &[NaiveDate];

    /// Predict one point per date in `frame`
    ///
    /// The frame must carry every column named by [`FittedModel::regressors`].
    fn predict(&self, frame: &RegressorFrame) -> Result<Vec<ForecastPoint>>;

    /// Dates for a prediction frame: optionally the history, then `periods`
    /// dates stepping `cadence` past the last historical date
    fn make_future_dates(&self, periods: usize, cadence: Cadence, include_history: bool) -> Vec<NaiveDate> {
        let history = self.history_dates();
        let mut dates = if include_history {
            history.to_vec()
        } else {
            Vec::with_capacity(periods)
        };
        if let Some(&last) = history.last() {
            dates.extend((1..=periods as i64).map(|k| cadence.advance(last, k)));
        }
        dates
    }
}

//! Forecast adapter.
//!
//! Reshapes a per-(store, department) merged series into a [`TrainingFrame`],
//! runs the fit/predict cycle of a [`Forecaster`] over the history plus
//! [`DEFAULT_HORIZON`] weekly periods, and floors the output at zero.

use crate::encoding::store_type_dummies;
use crate::fill::fill_column;
use crate::future::{ensure_len, regressors_for_dates};
use data_spi::{MergedRow, MergedSeries};
use forecast_api::{ForecastConfig, DEFAULT_HORIZON, FORECAST_CADENCE};
use forecast_spi::{ForecastError, ForecastResult, Forecaster, Result, TrainingFrame};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const TEMPERATURE: &str = "Temperature";
pub const FUEL_PRICE: &str = "Fuel_Price";
pub const IS_HOLIDAY: &str = "IsHoliday";
pub const SIZE: &str = "Size";

/// Forecast plus the inputs it was fitted on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastOutcome {
    /// History followed by the future horizon, floored at zero
    pub result: ForecastResult,
    /// The fit frame: dates, clamped demand and filled regressors
    pub history: TrainingFrame,
    /// Regressor names in model order
    pub regressors: Vec<String>,
}

/// Runs a forecaster over a merged series.
#[derive(Debug, Clone, Default)]
pub struct ForecastAdapter {
    config: ForecastConfig,
}

impl ForecastAdapter {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Build the fit frame for `series`.
    ///
    /// Rows are ordered by date, demand is floored at zero and every
    /// regressor is forward- then back-filled.
    pub fn training_frame(&self, series: &MergedSeries) -> Result<TrainingFrame> {
        if series.is_empty() {
            return Err(ForecastError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        let mut rows: Vec<&MergedRow> = series.iter().collect();
        rows.sort_by_key(|r| r.date);
        if let Some(pair) = rows.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(ForecastError::InvalidData(format!(
                "duplicate date {} in series",
                pair[0].date
            )));
        }

        let mut regressors = vec![
            fill_column(TEMPERATURE, rows.iter().map(|r| r.temperature).collect())?,
            fill_column(FUEL_PRICE, rows.iter().map(|r| r.fuel_price).collect())?,
            fill_column(
                IS_HOLIDAY,
                rows.iter()
                    .map(|r| Some(if r.is_holiday { 1.0 } else { 0.0 }))
                    .collect(),
            )?,
            fill_column(SIZE, rows.iter().map(|r| r.size).collect())?,
        ];
        let types: Vec<_> = rows.iter().map(|r| r.store_type).collect();
        regressors.extend(store_type_dummies(&types));

        TrainingFrame::new(
            rows.iter().map(|r| r.date).collect(),
            rows.iter().map(|r| r.demand()).collect(),
            regressors,
        )
    }

    /// Fit `forecaster` to `series` and predict history plus horizon.
    pub fn forecast(&self, forecaster: &dyn Forecaster, series: &MergedSeries) -> Result<ForecastOutcome> {
        self.config.validate()?;
        let history = self.training_frame(series)?;
        let regressors: Vec<String> = history
            .regressor_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        info!(
            forecaster = forecaster.name(),
            rows = history.len(),
            regressors = ?regressors,
            "Fitting forecast model"
        );
        let model = forecaster.fit(&self.config.model_config(&regressors), &history)?;

        let dates = model.make_future_dates(DEFAULT_HORIZON, FORECAST_CADENCE, true);
        let frame = regressors_for_dates(&history, dates)?;
        let points = model.predict(&frame)?;
        ensure_len(frame.len(), points.len())?;

        let mut result = ForecastResult::new(points, history.len());
        result.clamp_non_negative();
        debug!(
            points = result.len(),
            horizon = result.horizon,
            "Forecast complete"
        );

        Ok(ForecastOutcome {
            result,
            history,
            regressors,
        })
    }
}

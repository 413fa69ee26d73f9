//! Regressor frames for prediction dates.

use crate::fill::fill_column;
use chrono::NaiveDate;
use forecast_spi::{Column, ForecastError, RegressorFrame, Result, TrainingFrame};
use std::collections::HashMap;

/// Align the history's regressors to `dates`.
///
/// Dates present in the history take the historical value; any other date
/// takes the last known value before it, or the first one after it for
/// dates preceding the history.
pub fn regressors_for_dates(history: &TrainingFrame, dates: Vec<NaiveDate>) -> Result<RegressorFrame> {
    let index: HashMap<NaiveDate, usize> = history
        .ds
        .iter()
        .enumerate()
        .map(|(i, &d)| (d, i))
        .collect();

    let columns = history
        .regressors
        .iter()
        .map(|column| {
            let values = dates
                .iter()
                .map(|d| index.get(d).map(|&i| column.values[i]))
                .collect();
            fill_column(&column.name, values)
        })
        .collect::<Result<Vec<Column>>>()?;

    RegressorFrame::new(dates, columns)
}

/// Predictions must cover every requested date.
pub(crate) fn ensure_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ForecastError::LengthMismatch { expected, actual })
    }
}

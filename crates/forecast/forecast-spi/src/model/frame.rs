//! Column-oriented frames exchanged with a forecaster.

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

fn check_lengths(expected: usize, columns: &[Column]) -> Result<()> {
    match columns.iter().find(|c| c.values.len() != expected) {
        Some(column) => Err(ForecastError::LengthMismatch {
            expected,
            actual: column.values.len(),
        }),
        None => Ok(()),
    }
}

/// Dates plus regressor values, used for prediction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressorFrame {
    dates: Vec<NaiveDate>,
    columns: Vec<Column>,
}

impl RegressorFrame {
    /// Build a frame; every column must have one value per date.
    pub fn new(dates: Vec<NaiveDate>, columns: Vec<Column>) -> Result<Self> {
        check_lengths(dates.len(), &columns)?;
        Ok(Self { dates, columns })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Historical frame in the forecaster's schema: `ds`, `y` and regressors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingFrame {
    pub ds: Vec<NaiveDate>,
    pub y: Vec<f64>,
    pub regressors: Vec<Column>,
}

impl TrainingFrame {
    /// Build a frame; `y` and every regressor must match `ds` in length.
    pub fn new(ds: Vec<NaiveDate>, y: Vec<f64>, regressors: Vec<Column>) -> Result<Self> {
        if y.len() != ds.len() {
            return Err(ForecastError::LengthMismatch {
                expected: ds.len(),
                actual: y.len(),
            });
        }
        check_lengths(ds.len(), &regressors)?;
        Ok(Self { ds, y, regressors })
    }

    pub fn len(&self) -> usize {
        self.ds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ds.is_empty()
    }

    pub fn regressor_names(&self) -> Vec<&str> {
        self.regressors.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.ds.last().copied()
    }

    /// The history's dates and regressors, e.g. for in-sample prediction.
    pub fn regressor_frame(&self) -> RegressorFrame {
        RegressorFrame {
            dates: self.ds.clone(),
            columns: self.regressors.clone(),
        }
    }
}

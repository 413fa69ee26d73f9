//! Gap filling for regressor columns.

use forecast_spi::{Column, ForecastError, Result};

/// Carry the last observed value forward over gaps.
pub fn forward_fill(values: &mut [Option<f64>]) {
    let mut last = None;
    for value in values.iter_mut() {
        match value {
            Some(v) => last = Some(*v),
            None => *value = last,
        }
    }
}

/// Carry the next observed value backward over gaps.
pub fn backward_fill(values: &mut [Option<f64>]) {
    let mut next = None;
    for value in values.iter_mut().rev() {
        match value {
            Some(v) => next = Some(*v),
            None => *value = next,
        }
    }
}

/// Forward-fill then back-fill `values` into a complete column.
///
/// A column with no observed value at all cannot be filled.
pub fn fill_column(name: &str, mut values: Vec<Option<f64>>) -> Result<Column> {
    forward_fill(&mut values);
    backward_fill(&mut values);
    let filled = values
        .into_iter()
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| ForecastError::MissingRegressor(name.to_string()))?;
    Ok(Column::new(name, filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_fill() {
        let mut values = vec![None, Some(1.0), None, None, Some(4.0), None];
        forward_fill(&mut values);
        assert_eq!(values, vec![None, Some(1.0), Some(1.0), Some(1.0), Some(4.0), Some(4.0)]);
    }

    #[test]
    fn test_backward_fill() {
        let mut values = vec![None, None, Some(2.0), None];
        backward_fill(&mut values);
        assert_eq!(values, vec![Some(2.0), Some(2.0), Some(2.0), None]);
    }

    #[test]
    fn test_fill_column_leading_gap() {
        let column = fill_column("Temperature", vec![None, Some(40.0), None, Some(42.0)]).unwrap();
        assert_eq!(column.name, "Temperature");
        assert_eq!(column.values, vec![40.0, 40.0, 40.0, 42.0]);
    }

    #[test]
    fn test_fill_column_all_missing() {
        let err = fill_column("Fuel_Price", vec![None, None]).unwrap_err();
        assert_eq!(err, ForecastError::MissingRegressor("Fuel_Price".to_string()));
    }

    #[test]
    fn test_fill_column_empty_is_ok() {
        assert!(fill_column("Size", vec![]).unwrap().values.is_empty());
    }
}

//! Seasonal regression forecaster.
//!
//! Decomposes the target into a linear trend, a yearly Fourier series and
//! linear external regressor effects, combined additively or
//! multiplicatively:
//!
//! ```text
//! additive:        y = g(t) + s(t) + x·β
//! multiplicative:  y = g(t) * (1 + s(t) + x·β)
//! ```
//!
//! Additive fits solve trend and effects jointly; multiplicative fits
//! alternate between the trend and the effects. Seasonal and regressor
//! coefficients carry a small ridge penalty, the trend none.

use chrono::{Datelike, NaiveDate};
use forecast_api::ForecastConfig;
use forecast_spi::{
    Column, FittedModel, ForecastComponents, ForecastError, ForecastPoint, Forecaster, ModelConfig,
    RegressorFrame, Result, SeasonalityMode, TrainingFrame,
};
use nalgebra::{DMatrix, DVector};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Length of the yearly seasonal cycle in days
const YEAR_DAYS: f64 = 365.25;
const MIN_HISTORY: usize = 2;
/// Smallest scaled trend value a multiplicative fit divides by
const MIN_TREND: f64 = 1e-6;
const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-12;

/// Trend + yearly seasonality + regressors, fitted by least squares.
#[derive(Debug, Clone)]
pub struct SeasonalRegressionForecaster {
    fourier_order: usize,
    regularization: f64,
}

impl SeasonalRegressionForecaster {
    pub fn new(fourier_order: usize, regularization: f64) -> Self {
        Self {
            fourier_order,
            regularization,
        }
    }

    pub fn from_config(config: &ForecastConfig) -> Self {
        Self::new(config.yearly_fourier_order, config.regularization)
    }
}

impl Default for SeasonalRegressionForecaster {
    fn default() -> Self {
        Self::from_config(&ForecastConfig::default())
    }
}

impl Forecaster for SeasonalRegressionForecaster {
    fn name(&self) -> &str {
        "seasonal-regression"
    }

    fn fit(&self, config: &ModelConfig, history: &TrainingFrame) -> Result<Box<dyn FittedModel>> {
        validate_config(config)?;
        validate_history(history)?;

        let columns = config
            .regressors
            .iter()
            .map(|name| {
                let column = history
                    .regressors
                    .iter()
                    .find(|c| &c.name == name)
                    .ok_or_else(|| ForecastError::MissingRegressor(name.clone()))?;
                if column.values.iter().any(|v| !v.is_finite()) {
                    return Err(ForecastError::InvalidData(format!(
                        "non-finite value in regressor '{}'",
                        name
                    )));
                }
                Ok(column)
            })
            .collect::<Result<Vec<&Column>>>()?;

        let n = history.len();
        let origin = history.ds[0];
        let last = history.ds[n - 1];
        let span_days = (last - origin).num_days() as f64;

        let y_scale = history.y.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let y_scale = if y_scale > 0.0 { y_scale } else { 1.0 };
        let y: Vec<f64> = history.y.iter().map(|v| v / y_scale).collect();

        let t: Vec<f64> = history
            .ds
            .iter()
            .map(|&d| (d - origin).num_days() as f64 / span_days)
            .collect();

        let fourier_order = if config.yearly_seasonality {
            self.fourier_order
        } else {
            0
        };
        let scalings: Vec<RegressorScaling> = columns.iter().map(|c| RegressorScaling::fit(c)).collect();
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                let values: Vec<f64> = columns.iter().map(|c| c.values[i]).collect();
                feature_row(history.ds[i], fourier_order, &scalings, &values)
            })
            .collect();
        let width = 2 * fourier_order + scalings.len();

        let (mode, fit) = match config.seasonality_mode {
            SeasonalityMode::Multiplicative => {
                match fit_multiplicative(&t, &y, &rows, width, self.regularization)? {
                    Some(fit) => (SeasonalityMode::Multiplicative, fit),
                    None => {
                        warn!("Trend reaches zero; falling back to additive seasonality");
                        let fit = fit_additive(&t, &y, &rows, width, self.regularization)?;
                        (SeasonalityMode::Additive, fit)
                    }
                }
            }
            SeasonalityMode::Additive => (
                SeasonalityMode::Additive,
                fit_additive(&t, &y, &rows, width, self.regularization)?,
            ),
        };

        let mut model = SeasonalRegressionModel {
            mode,
            origin,
            last,
            span_days,
            y_scale,
            intercept: fit.intercept,
            slope: fit.slope,
            fourier_order,
            regressor_names: config.regressors.clone(),
            scalings,
            coefficients: fit.features,
            sigma: 0.0,
            z: stats::inverse_cdf(0.5 + config.interval_width / 2.0),
            history_dates: history.ds.clone(),
        };

        let residuals: Vec<f64> = rows
            .iter()
            .zip(&history.ds)
            .zip(&history.y)
            .map(|((row, &date), &actual)| {
                let fitted = model.components_from_row(date, row);
                (actual - total(&fitted)) / y_scale
            })
            .collect();
        model.sigma = stats::sample_std_dev(&residuals).unwrap_or(0.0);

        debug!(
            rows = n,
            features = width,
            mode = ?model.mode,
            sigma = model.sigma,
            "Fitted seasonal regression model"
        );
        Ok(Box::new(model))
    }
}

fn validate_config(config: &ModelConfig) -> Result<()> {
    if !(config.interval_width > 0.0 && config.interval_width < 1.0) {
        return Err(ForecastError::InvalidParameter {
            name: "interval_width".to_string(),
            reason: "must be in (0, 1)".to_string(),
        });
    }
    if config.weekly_seasonality || config.daily_seasonality {
        return Err(ForecastError::InvalidParameter {
            name: "seasonality".to_string(),
            reason: "only yearly seasonality is supported for weekly data".to_string(),
        });
    }
    Ok(())
}

fn validate_history(history: &TrainingFrame) -> Result<()> {
    if history.len() < MIN_HISTORY {
        return Err(ForecastError::InsufficientData {
            required: MIN_HISTORY,
            actual: history.len(),
        });
    }
    if let Some(w) = history.ds.windows(2).find(|w| w[1] <= w[0]) {
        return Err(ForecastError::InvalidData(format!(
            "dates must be strictly increasing, found {} after {}",
            w[1], w[0]
        )));
    }
    if history.y.iter().any(|v| !v.is_finite()) {
        return Err(ForecastError::InvalidData("non-finite target value".to_string()));
    }
    Ok(())
}

/// Trend line plus feature coefficients, in scaled target units.
struct Fit {
    intercept: f64,
    slope: f64,
    features: Vec<f64>,
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Joint least squares of `y ~ k + m·t + x·β`; only `β` is penalized.
fn fit_additive(t: &[f64], y: &[f64], rows: &[Vec<f64>], width: usize, lambda: f64) -> Result<Fit> {
    let design = DMatrix::from_fn(t.len(), width + 2, |i, j| match j {
        0 => 1.0,
        1 => t[i],
        _ => rows[i][j - 2],
    });
    let mut penalties = vec![0.0, 0.0];
    penalties.resize(width + 2, lambda);

    let beta = penalized_solve(&design, y, &penalties)?;
    Ok(Fit {
        intercept: beta[0],
        slope: beta[1],
        features: beta[2..].to_vec(),
    })
}

/// Alternating least squares of `y ~ (k + m·t)(1 + x·β)`.
///
/// Returns `None` when the trend is not strictly positive over the history.
fn fit_multiplicative(
    t: &[f64],
    y: &[f64],
    rows: &[Vec<f64>],
    width: usize,
    lambda: f64,
) -> Result<Option<Fit>> {
    let n = t.len();
    let mut fit = Fit {
        intercept: 0.0,
        slope: 0.0,
        features: vec![0.0; width],
    };
    let mut previous_sse = f64::INFINITY;

    for iteration in 0..MAX_ITERATIONS {
        let factor: Vec<f64> = rows.iter().map(|r| 1.0 + dot(r, &fit.features)).collect();
        let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { factor[i] } else { t[i] * factor[i] });
        let beta = penalized_solve(&design, y, &[0.0, 0.0])?;
        fit.intercept = beta[0];
        fit.slope = beta[1];

        let trend: Vec<f64> = t.iter().map(|t| fit.intercept + fit.slope * t).collect();
        if trend.iter().any(|&g| g <= MIN_TREND) {
            return Ok(None);
        }
        if width == 0 {
            break;
        }

        let design = DMatrix::from_fn(n, width, |i, j| trend[i] * rows[i][j]);
        let target: Vec<f64> = y.iter().zip(&trend).map(|(y, g)| y - g).collect();
        fit.features = penalized_solve(&design, &target, &vec![lambda; width])?;

        let sse: f64 = (0..n)
            .map(|i| (y[i] - trend[i] * (1.0 + dot(&rows[i], &fit.features))).powi(2))
            .sum();
        if (previous_sse - sse).abs() <= TOLERANCE * (1.0 + sse) {
            debug!(iterations = iteration + 1, "Multiplicative fit converged");
            break;
        }
        previous_sse = sse;
    }

    Ok(Some(fit))
}

/// Solve `(XᵀX + diag(penalties)) β = Xᵀz`.
fn penalized_solve(design: &DMatrix<f64>, target: &[f64], penalties: &[f64]) -> Result<Vec<f64>> {
    if design.ncols() == 0 {
        return Ok(Vec::new());
    }
    let xt = design.transpose();
    let mut gram = &xt * design;
    for (j, penalty) in penalties.iter().enumerate() {
        gram[(j, j)] += penalty;
    }
    let rhs = &xt * DVector::from_column_slice(target);

    let beta = gram
        .cholesky()
        .ok_or_else(|| {
            ForecastError::NumericalError("normal equations are not positive definite".to_string())
        })?
        .solve(&rhs);

    if beta.iter().any(|b| !b.is_finite()) {
        return Err(ForecastError::NumericalError(
            "non-finite regression coefficient".to_string(),
        ));
    }
    Ok(beta.iter().copied().collect())
}

/// Yearly Fourier terms followed by scaled regressor values.
fn feature_row(date: NaiveDate, order: usize, scalings: &[RegressorScaling], values: &[f64]) -> Vec<f64> {
    let day = date.num_days_from_ce() as f64;
    let mut row = Vec::with_capacity(2 * order + values.len());
    for k in 1..=order {
        let angle = 2.0 * PI * k as f64 * day / YEAR_DAYS;
        row.push(angle.sin());
        row.push(angle.cos());
    }
    row.extend(scalings.iter().zip(values).map(|(s, &v)| s.apply(v)));
    row
}

fn total(c: &ForecastComponents) -> f64 {
    c.trend + c.yearly + c.extra_regressors
}

/// Centering and scaling of one regressor; 0/1 indicators are left as is.
#[derive(Debug, Clone)]
struct RegressorScaling {
    mean: f64,
    scale: f64,
}

impl RegressorScaling {
    fn fit(column: &Column) -> Self {
        if column.values.iter().all(|&v| v == 0.0 || v == 1.0) {
            return Self {
                mean: 0.0,
                scale: 1.0,
            };
        }
        let mean = stats::mean(&column.values).unwrap_or(0.0);
        let scale = stats::sample_std_dev(&column.values)
            .filter(|s| *s > 0.0)
            .unwrap_or(1.0);
        Self { mean, scale }
    }

    fn apply(&self, value: f64) -> f64 {
        (value - self.mean) / self.scale
    }
}

/// A fitted [`SeasonalRegressionForecaster`].
#[derive(Debug, Clone)]
pub struct SeasonalRegressionModel {
    /// Mode actually used, after any fallback
    mode: SeasonalityMode,
    origin: NaiveDate,
    last: NaiveDate,
    span_days: f64,
    y_scale: f64,
    intercept: f64,
    slope: f64,
    fourier_order: usize,
    regressor_names: Vec<String>,
    scalings: Vec<RegressorScaling>,
    /// Fourier coefficients then regressor coefficients
    coefficients: Vec<f64>,
    /// Residual standard deviation in scaled units
    sigma: f64,
    z: f64,
    history_dates: Vec<NaiveDate>,
}

impl SeasonalRegressionModel {
    pub fn seasonality_mode(&self) -> SeasonalityMode {
        self.mode
    }

    fn components_from_row(&self, date: NaiveDate, row: &[f64]) -> ForecastComponents {
        let t = (date - self.origin).num_days() as f64 / self.span_days;
        let g = self.intercept + self.slope * t;

        let (seasonal_row, extra_row) = row.split_at(2 * self.fourier_order);
        let (seasonal_coef, extra_coef) = self.coefficients.split_at(2 * self.fourier_order);
        let seasonal = dot(seasonal_row, seasonal_coef);
        let extra = dot(extra_row, extra_coef);

        let (yearly, extra) = match self.mode {
            SeasonalityMode::Multiplicative => (g * seasonal, g * extra),
            SeasonalityMode::Additive => (seasonal, extra),
        };
        ForecastComponents {
            trend: g * self.y_scale,
            yearly: yearly * self.y_scale,
            extra_regressors: extra * self.y_scale,
        }
    }
}

impl FittedModel for SeasonalRegressionModel {
    fn regressors(&self) -> &[String] {
        &self.regressor_names
    }

    fn history_dates(&self) -> &[NaiveDate] {
        &self.history_dates
    }

    fn predict(&self, frame: &RegressorFrame) -> Result<Vec<ForecastPoint>> {
        let columns = self
            .regressor_names
            .iter()
            .map(|name| {
                frame
                    .column(name)
                    .ok_or_else(|| ForecastError::MissingRegressor(name.clone()))
            })
            .collect::<Result<Vec<&Column>>>()?;

        frame
            .dates()
            .iter()
            .enumerate()
            .map(|(i, &date)| {
                let values: Vec<f64> = columns.iter().map(|c| c.values[i]).collect();
                if values.iter().any(|v| !v.is_finite()) {
                    return Err(ForecastError::InvalidData(format!(
                        "non-finite regressor value on {}",
                        date
                    )));
                }
                let row = feature_row(date, self.fourier_order, &self.scalings, &values);
                let components = self.components_from_row(date, &row);
                let yhat = total(&components);

                // uncertainty grows with distance past the history
                let beyond = (date - self.last).num_days().max(0) as f64;
                let half_width =
                    self.z * self.sigma * (1.0 + beyond / self.span_days).sqrt() * self.y_scale;

                Ok(ForecastPoint {
                    date,
                    yhat,
                    yhat_lower: yhat - half_width,
                    yhat_upper: yhat + half_width,
                    components,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_spi::Cadence;

    fn weekly_dates(n: usize) -> Vec<NaiveDate> {
        let start = NaiveDate::from_ymd_opt(2010, 2, 5).unwrap();
        (0..n as i64).map(|k| Cadence::WEEKLY.advance(start, k)).collect()
    }

    fn additive(regressors: &[&str]) -> ModelConfig {
        ModelConfig {
            seasonality_mode: SeasonalityMode::Additive,
            yearly_seasonality: false,
            regressors: regressors.iter().map(|s| s.to_string()).collect(),
            ..ModelConfig::default()
        }
    }

    #[test]
    fn test_linear_trend_recovered() {
        let ds = weekly_dates(30);
        let y: Vec<f64> = (0..30).map(|i| 100.0 + 2.0 * i as f64).collect();
        let history = TrainingFrame::new(ds.clone(), y.clone(), vec![]).unwrap();

        let model = SeasonalRegressionForecaster::default()
            .fit(&additive(&[]), &history)
            .unwrap();
        let dates = model.make_future_dates(4, Cadence::WEEKLY, true);
        let frame = RegressorFrame::new(dates, vec![]).unwrap();
        let points = model.predict(&frame).unwrap();

        assert_eq!(points.len(), 34);
        for (p, actual) in points.iter().zip(&y) {
            assert!((p.yhat - actual).abs() < 1e-6);
        }
        assert!((points[33].yhat - (100.0 + 2.0 * 33.0)).abs() < 1e-6);
    }

    #[test]
    fn test_regressor_effect_recovered() {
        let ds = weekly_dates(40);
        let holiday: Vec<f64> = (0..40).map(|i| if i % 10 == 3 { 1.0 } else { 0.0 }).collect();
        let y: Vec<f64> = holiday.iter().map(|h| 1000.0 + 500.0 * h).collect();
        let history = TrainingFrame::new(
            ds,
            y,
            vec![Column::new("IsHoliday", holiday)],
        )
        .unwrap();

        let model = SeasonalRegressionForecaster::default()
            .fit(&additive(&["IsHoliday"]), &history)
            .unwrap();
        let points = model.predict(&history.regressor_frame()).unwrap();

        assert!((points[3].yhat - 1500.0).abs() < 15.0);
        assert!((points[4].yhat - 1000.0).abs() < 15.0);
        assert!(points[3].components.extra_regressors > 400.0);
    }

    #[test]
    fn test_yearly_seasonality_multiplicative() {
        let ds = weekly_dates(156);
        let y: Vec<f64> = ds
            .iter()
            .map(|d| {
                let day = d.num_days_from_ce() as f64;
                1000.0 * (1.0 + 0.3 * (2.0 * PI * day / YEAR_DAYS).sin())
            })
            .collect();
        let history = TrainingFrame::new(ds, y.clone(), vec![]).unwrap();
        let config = ModelConfig {
            seasonality_mode: SeasonalityMode::Multiplicative,
            ..ModelConfig::default()
        };

        let model = SeasonalRegressionForecaster::default().fit(&config, &history).unwrap();
        let points = model.predict(&history.regressor_frame()).unwrap();

        for (p, actual) in points.iter().zip(&y) {
            assert!((p.yhat - actual).abs() / actual < 0.05);
            assert!((p.components.trend + p.components.yearly - p.yhat).abs() < 1e-6);
        }
    }

    #[test]
    fn test_all_zero_history_falls_back() {
        let history = TrainingFrame::new(weekly_dates(10), vec![0.0; 10], vec![]).unwrap();
        let config = ModelConfig {
            seasonality_mode: SeasonalityMode::Multiplicative,
            ..ModelConfig::default()
        };
        let model = SeasonalRegressionForecaster::default().fit(&config, &history).unwrap();
        let points = model.predict(&history.regressor_frame()).unwrap();
        assert!(points.iter().all(|p| p.yhat.abs() < 1e-9));
    }

    #[test]
    fn test_interval_widens_past_history() {
        let ds = weekly_dates(52);
        let y: Vec<f64> = (0..52)
            .map(|i| 500.0 + if i % 2 == 0 { 40.0 } else { -40.0 })
            .collect();
        let history = TrainingFrame::new(ds, y, vec![]).unwrap();
        let model = SeasonalRegressionForecaster::default()
            .fit(&additive(&[]), &history)
            .unwrap();

        let dates = model.make_future_dates(52, Cadence::WEEKLY, true);
        let points = model
            .predict(&RegressorFrame::new(dates, vec![]).unwrap())
            .unwrap();

        let width = |p: &ForecastPoint| p.yhat_upper - p.yhat_lower;
        assert!(width(&points[0]) > 0.0);
        assert!((width(&points[0]) - width(&points[51])).abs() < 1e-9);
        assert!(width(&points[103]) > width(&points[52]));
        assert!(points.iter().all(|p| p.yhat_lower <= p.yhat && p.yhat <= p.yhat_upper));
    }

    #[test]
    fn test_insufficient_history() {
        let history = TrainingFrame::new(weekly_dates(1), vec![1.0], vec![]).unwrap();
        let err = SeasonalRegressionForecaster::default()
            .fit(&ModelConfig::default(), &history)
            .err()
            .unwrap();
        assert_eq!(err, ForecastError::InsufficientData { required: 2, actual: 1 });
    }

    #[test]
    fn test_unsorted_dates_rejected() {
        let mut ds = weekly_dates(3);
        ds.swap(0, 1);
        let history = TrainingFrame::new(ds, vec![1.0, 2.0, 3.0], vec![]).unwrap();
        let err = SeasonalRegressionForecaster::default()
            .fit(&ModelConfig::default(), &history)
            .err()
            .unwrap();
        assert!(matches!(err, ForecastError::InvalidData(_)));
    }

    #[test]
    fn test_unknown_regressor_rejected() {
        let history = TrainingFrame::new(weekly_dates(3), vec![1.0, 2.0, 3.0], vec![]).unwrap();
        let err = SeasonalRegressionForecaster::default()
            .fit(&additive(&["Size"]), &history)
            .err()
            .unwrap();
        assert_eq!(err, ForecastError::MissingRegressor("Size".to_string()));
    }

    #[test]
    fn test_predict_requires_regressor_columns() {
        let history = TrainingFrame::new(
            weekly_dates(3),
            vec![1.0, 2.0, 3.0],
            vec![Column::new("Temperature", vec![40.0, 45.0, 50.0])],
        )
        .unwrap();
        let model = SeasonalRegressionForecaster::default()
            .fit(&additive(&["Temperature"]), &history)
            .unwrap();
        let frame = RegressorFrame::new(history.ds.clone(), vec![]).unwrap();
        assert_eq!(
            model.predict(&frame).unwrap_err(),
            ForecastError::MissingRegressor("Temperature".to_string())
        );
    }

    #[test]
    fn test_weekly_seasonality_rejected() {
        let history = TrainingFrame::new(weekly_dates(3), vec![1.0, 2.0, 3.0], vec![]).unwrap();
        let config = ModelConfig {
            weekly_seasonality: true,
            ..ModelConfig::default()
        };
        assert!(matches!(
            SeasonalRegressionForecaster::default().fit(&config, &history),
            Err(ForecastError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_constant_regressor_is_harmless() {
        let history = TrainingFrame::new(
            weekly_dates(5),
            vec![10.0, 12.0, 14.0, 16.0, 18.0],
            vec![Column::new("Size", vec![151315.0; 5])],
        )
        .unwrap();
        let model = SeasonalRegressionForecaster::default()
            .fit(&additive(&["Size"]), &history)
            .unwrap();
        let points = model.predict(&history.regressor_frame()).unwrap();
        assert!((points[4].yhat - 18.0).abs() < 1e-6);
    }
}

//! Analysis pipeline.

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::report::{AnalysisReport, SelectionOptions};
use data_facade::{select, CsvRetailSource, DatasetCache, RetailDataset, RetailSource, Selection};
use forecast_facade::{ForecastAdapter, ForecastConfig, Forecaster, SeasonalRegressionForecaster};
use inventory_facade::{
    explain, outside_recommended_ranges, ClassicPolicyCalculator, PolicyCalculator,
    PolicyParameters,
};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};

/// Runs data preparation, forecasting and policy calculation.
///
/// The prepared dataset is cached between runs and reloaded only when the
/// source changes or [`InventoryAnalyzer::invalidate`] is called.
pub struct InventoryAnalyzer {
    source: Box<dyn RetailSource>,
    cache: DatasetCache,
    forecaster: Box<dyn Forecaster>,
    adapter: ForecastAdapter,
    calculator: Box<dyn PolicyCalculator>,
}

impl InventoryAnalyzer {
    pub fn new(
        source: Box<dyn RetailSource>,
        forecaster: Box<dyn Forecaster>,
        calculator: Box<dyn PolicyCalculator>,
        forecast: ForecastConfig,
    ) -> Self {
        Self {
            source,
            cache: DatasetCache::new(),
            forecaster,
            adapter: ForecastAdapter::new(forecast),
            calculator,
        }
    }

    /// CSV source, seasonal regression forecaster and classic policy.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            Box::new(CsvRetailSource::new(config.data.clone())),
            Box::new(SeasonalRegressionForecaster::from_config(&config.forecast)),
            Box::new(ClassicPolicyCalculator::new()),
            config.forecast.clone(),
        )
    }

    /// Prepared dataset, from cache when the source is unchanged.
    pub fn load(&mut self) -> Result<Arc<RetailDataset>> {
        let dataset = self.cache.get_or_load(self.source.as_ref())?;
        debug!(
            source = self.source.name(),
            rows = dataset.merged.len(),
            "Dataset ready"
        );
        Ok(dataset)
    }

    /// Distinct store and department ids present in the sales data.
    pub fn selections(&mut self) -> Result<SelectionOptions> {
        let dataset = self.load()?;
        Ok(SelectionOptions {
            stores: dataset.stores.clone(),
            departments: dataset.departments.clone(),
        })
    }

    /// Force the next run to reload the source.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Analyze one (store, department) pair.
    ///
    /// Parameters are validated before anything is loaded or fitted.
    pub fn run(&mut self, selection: Selection, params: &PolicyParameters) -> Result<AnalysisReport> {
        let span = info_span!("analysis", store = selection.store, dept = selection.dept);
        let _enter = span.enter();

        params.validate().map_err(AnalysisError::InvalidParameters)?;
        for (name, range) in outside_recommended_ranges(params) {
            warn!(parameter = name, min = range.min, max = range.max, "Outside recommended range");
        }

        let dataset = self.load()?;
        let series = select(&dataset, selection);
        if series.is_empty() {
            return Err(AnalysisError::NoDataForSelection {
                store: selection.store,
                dept: selection.dept,
            });
        }
        info!(weeks = series.len(), "Forecasting demand");

        let forecast = self.adapter.forecast(self.forecaster.as_ref(), &series)?;
        debug!(
            points = forecast.result.len(),
            horizon = forecast.result.horizon,
            "Forecast ready"
        );

        let policy = self
            .calculator
            .calculate(&forecast.result.yhat(), &forecast.history.y, params)
            .map_err(AnalysisError::PolicyFailed)?;
        info!(
            safety_stock = policy.safety_stock,
            reorder_point = policy.reorder_point,
            order_quantity = %policy.order_quantity,
            "Policy computed"
        );

        Ok(AnalysisReport {
            selection,
            summary: explain(&policy, params),
            forecast,
            policy,
            parameters: *params,
        })
    }
}

//! Run configuration.

use data_facade::{DataConfig, Selection};
use forecast_facade::ForecastConfig;
use inventory_facade::{default_parameters, PolicyParameters};
use serde::{Deserialize, Serialize};

/// Everything one analysis run needs.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub store: u32,
    pub dept: u32,
    pub data: DataConfig,
    pub forecast: ForecastConfig,
    pub parameters: PolicyParameters,
}

impl AnalysisConfig {
    pub fn selection(&self) -> Selection {
        Selection::new(self.store, self.dept)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            store: 1,
            dept: 1,
            data: DataConfig::default(),
            forecast: ForecastConfig::default(),
            parameters: default_parameters(),
        }
    }
}

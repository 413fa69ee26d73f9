//! Analysis outputs.

use data_facade::Selection;
use forecast_facade::ForecastOutcome;
use inventory_facade::{InventoryPolicy, PolicyParameters};
use serde::{Deserialize, Serialize};

/// Forecast, policy and explanation for one selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub selection: Selection,
    pub forecast: ForecastOutcome,
    pub policy: InventoryPolicy,
    pub parameters: PolicyParameters,
    /// Plain-language explanation of `policy`
    pub summary: String,
}

/// Store and department ids a caller can choose from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOptions {
    pub stores: Vec<u32>,
    pub departments: Vec<u32>,
}

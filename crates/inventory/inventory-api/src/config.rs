//! Inventory parameter defaults and builder.

use inventory_spi::{PolicyParameters, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LEAD_TIME_WEEKS: f64 = 4.0;
pub const DEFAULT_SERVICE_LEVEL_PCT: f64 = 95.0;
pub const DEFAULT_UNIT_COST: f64 = 50.0;
pub const DEFAULT_HOLDING_COST_PCT: f64 = 25.0;
pub const DEFAULT_ORDERING_COST: f64 = 100.0;

/// Parameters used when the analyst has not changed anything.
pub fn default_parameters() -> PolicyParameters {
    PolicyParameters::new(
        DEFAULT_LEAD_TIME_WEEKS,
        DEFAULT_SERVICE_LEVEL_PCT,
        DEFAULT_UNIT_COST,
        DEFAULT_HOLDING_COST_PCT,
        DEFAULT_ORDERING_COST,
    )
}

// ============================================================================
// Recommended ranges
// ============================================================================

/// Input range and step suggested to an interactive front end.
///
/// Ranges are advisory; validation only rejects values no policy can be
/// computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const LEAD_TIME_RANGE: ParameterRange = ParameterRange::new(1.0, 12.0, 1.0);
pub const SERVICE_LEVEL_PCT_RANGE: ParameterRange = ParameterRange::new(80.0, 99.9, 0.1);
pub const UNIT_COST_RANGE: ParameterRange = ParameterRange::new(0.01, 10000.0, 0.01);
pub const HOLDING_COST_PCT_RANGE: ParameterRange = ParameterRange::new(1.0, 50.0, 0.5);
pub const ORDERING_COST_RANGE: ParameterRange = ParameterRange::new(0.0, 1000.0, 1.0);

/// Names and ranges of the inputs lying outside their recommended range.
pub fn outside_recommended_ranges(params: &PolicyParameters) -> Vec<(&'static str, ParameterRange)> {
    [
        ("lead_time", params.lead_time, LEAD_TIME_RANGE),
        ("service_level_pct", params.service_level_pct, SERVICE_LEVEL_PCT_RANGE),
        ("unit_cost", params.unit_cost, UNIT_COST_RANGE),
        ("holding_cost_pct", params.holding_cost_pct, HOLDING_COST_PCT_RANGE),
        ("ordering_cost", params.ordering_cost, ORDERING_COST_RANGE),
    ]
    .into_iter()
    .filter(|(_, value, range)| !range.contains(*value))
    .map(|(name, _, range)| (name, range))
    .collect()
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for PolicyParameters, starting from the defaults.
#[derive(Debug, Clone)]
pub struct PolicyParametersBuilder {
    params: PolicyParameters,
}

impl PolicyParametersBuilder {
    pub fn new() -> Self {
        Self {
            params: default_parameters(),
        }
    }

    pub fn lead_time(mut self, weeks: f64) -> Self {
        self.params.lead_time = weeks;
        self
    }

    pub fn service_level_pct(mut self, pct: f64) -> Self {
        self.params.service_level_pct = pct;
        self
    }

    pub fn unit_cost(mut self, cost: f64) -> Self {
        self.params.unit_cost = cost;
        self
    }

    pub fn holding_cost_pct(mut self, pct: f64) -> Self {
        self.params.holding_cost_pct = pct;
        self
    }

    pub fn ordering_cost(mut self, cost: f64) -> Self {
        self.params.ordering_cost = cost;
        self
    }

    /// Build and validate.
    pub fn build(self) -> Result<PolicyParameters> {
        self.params.validate()?;
        Ok(self.params)
    }
}

impl Default for PolicyParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

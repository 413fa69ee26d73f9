//! Business parameters of a replenishment policy.

use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};

/// Inputs chosen by the analyst.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyParameters {
    /// Replenishment lead time, in weekly periods.
    pub lead_time: f64,
    /// Target probability of no stockout during lead time, in percent.
    pub service_level_pct: f64,
    /// Purchase cost of one unit.
    pub unit_cost: f64,
    /// Annual holding cost as a percentage of unit cost.
    pub holding_cost_pct: f64,
    /// Fixed cost of placing one order.
    pub ordering_cost: f64,
}

impl PolicyParameters {
    pub fn new(
        lead_time: f64,
        service_level_pct: f64,
        unit_cost: f64,
        holding_cost_pct: f64,
        ordering_cost: f64,
    ) -> Self {
        Self {
            lead_time,
            service_level_pct,
            unit_cost,
            holding_cost_pct,
            ordering_cost,
        }
    }

    /// Reject values no policy can be computed from.
    ///
    /// The service level must lie strictly between 0 and 100; every other
    /// input must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let sl = self.service_level_pct;
        if !(sl.is_finite() && sl > 0.0 && sl < 100.0) {
            return Err(InventoryError::invalid(
                "service_level_pct",
                "must be in (0, 100)",
            ));
        }
        for (name, value) in [
            ("lead_time", self.lead_time),
            ("unit_cost", self.unit_cost),
            ("holding_cost_pct", self.holding_cost_pct),
            ("ordering_cost", self.ordering_cost),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(InventoryError::invalid(name, "must be finite and non-negative"));
            }
        }
        Ok(())
    }

    /// Service level as a probability.
    pub fn service_level(&self) -> f64 {
        self.service_level_pct / 100.0
    }

    /// Cost of holding one unit for a year.
    pub fn annual_holding_cost(&self) -> f64 {
        self.unit_cost * self.holding_cost_pct / 100.0
    }
}

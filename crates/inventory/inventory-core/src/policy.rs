//! Classic (s, Q) replenishment policy.
//!
//! ```text
//! Z   = Φ⁻¹(SL)
//! SS  = Z · σ · √L
//! ROP = μ · L + SS
//! EOQ = √(2 · D · S / H),  D = 52 · μ,  H = C · H% / 100
//! ```

use crate::normal::StandardNormal;
use inventory_spi::{
    DemandStatistics, InventoryError, InventoryPolicy, OrderQuantity, PolicyCalculator,
    PolicyParameters, QuantileFunction, Result,
};
use tracing::debug;

pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Calculator for the classic safety stock / reorder point / EOQ policy.
///
/// Average demand is the mean of the forecast over its full span; demand
/// variability is the sample standard deviation of the realized history.
#[derive(Debug, Clone, Default)]
pub struct ClassicPolicyCalculator<Q = StandardNormal> {
    quantile: Q,
}

impl ClassicPolicyCalculator<StandardNormal> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Q: QuantileFunction> ClassicPolicyCalculator<Q> {
    pub fn with_quantile(quantile: Q) -> Self {
        Self { quantile }
    }

    /// Compute the policy from demand moments directly.
    pub fn from_moments(&self, demand: DemandStatistics, params: &PolicyParameters) -> Result<InventoryPolicy> {
        params.validate()?;

        let z = self.quantile.inverse_cdf(params.service_level());
        let ss = safety_stock(z, demand.std_dev, params.lead_time);
        let rop = reorder_point(demand.mean, params.lead_time, ss);
        let holding = params.annual_holding_cost();
        let annual_demand = demand.mean * WEEKS_PER_YEAR;
        let order_quantity = match economic_order_quantity(annual_demand, params.ordering_cost, holding) {
            Some(eoq) => OrderQuantity::Finite(eoq as i64),
            None => OrderQuantity::Infinite,
        };

        let policy = InventoryPolicy {
            avg_weekly_demand: demand.mean as i64,
            std_weekly_demand: demand.std_dev as i64,
            safety_stock: ss as i64,
            reorder_point: rop as i64,
            order_quantity,
            z_score: round2(z),
            annual_holding_cost: round2(holding),
        };
        debug!(?policy, "Computed inventory policy");
        Ok(policy)
    }
}

impl<Q: QuantileFunction> PolicyCalculator for ClassicPolicyCalculator<Q> {
    fn calculate(
        &self,
        forecast: &[f64],
        history: &[f64],
        params: &PolicyParameters,
    ) -> Result<InventoryPolicy> {
        params.validate()?;
        self.from_moments(demand_statistics(forecast, history)?, params)
    }
}

/// Mean of `forecast` and sample standard deviation of `history`.
pub fn demand_statistics(forecast: &[f64], history: &[f64]) -> Result<DemandStatistics> {
    let mean = stats::mean(forecast).ok_or(InventoryError::InsufficientData {
        required: 1,
        got: 0,
    })?;
    let std_dev = stats::sample_std_dev(history).ok_or(InventoryError::InsufficientData {
        required: 2,
        got: history.len(),
    })?;
    Ok(DemandStatistics { mean, std_dev })
}

/// Buffer covering demand variability over the lead time.
pub fn safety_stock(z: f64, std_dev: f64, lead_time: f64) -> f64 {
    z * std_dev * lead_time.sqrt()
}

/// Stock level at which a new order is placed.
pub fn reorder_point(mean: f64, lead_time: f64, safety_stock: f64) -> f64 {
    mean * lead_time + safety_stock
}

/// Square-root order quantity; `None` when holding costs nothing.
pub fn economic_order_quantity(annual_demand: f64, ordering_cost: f64, holding_cost: f64) -> Option<f64> {
    if holding_cost > 0.0 {
        Some((2.0 * annual_demand * ordering_cost / holding_cost).sqrt())
    } else {
        None
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

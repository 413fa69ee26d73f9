//! Policy calculator trait.

use crate::error::Result;
use crate::model::{InventoryPolicy, PolicyParameters};

/// Derives a replenishment policy from a demand forecast.
pub trait PolicyCalculator: Send + Sync {
    /// Compute the policy.
    ///
    /// `forecast` holds point estimates over the full forecast span,
    /// `history` the realized (non-negative) demand per period.
    fn calculate(
        &self,
        forecast: &[f64],
        history: &[f64],
        params: &PolicyParameters,
    ) -> Result<InventoryPolicy>;
}

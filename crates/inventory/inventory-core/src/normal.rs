//! Standard normal distribution.

use inventory_spi::QuantileFunction;

/// The standard normal distribution N(0, 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNormal;

impl StandardNormal {
    pub fn new() -> Self {
        Self
    }
}

impl QuantileFunction for StandardNormal {
    fn inverse_cdf(&self, p: f64) -> f64 {
        stats::inverse_cdf(p)
    }
}

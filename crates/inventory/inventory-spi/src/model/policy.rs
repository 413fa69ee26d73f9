//! Inventory policy value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Economic order quantity, which is unbounded when holding is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderQuantity {
    Finite(i64),
    Infinite,
}

impl OrderQuantity {
    pub fn is_finite(&self) -> bool {
        matches!(self, OrderQuantity::Finite(_))
    }

    pub fn units(&self) -> Option<i64> {
        match self {
            OrderQuantity::Finite(units) => Some(*units),
            OrderQuantity::Infinite => None,
        }
    }
}

impl fmt::Display for OrderQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderQuantity::Finite(units) => write!(f, "{}", units),
            OrderQuantity::Infinite => write!(f, "inf"),
        }
    }
}

/// Demand moments a policy is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandStatistics {
    /// Mean weekly demand
    pub mean: f64,
    /// Weekly demand standard deviation
    pub std_dev: f64,
}

/// Recommended replenishment policy.
///
/// Unit counts are truncated toward zero; `z_score` and
/// `annual_holding_cost` are rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryPolicy {
    pub avg_weekly_demand: i64,
    pub std_weekly_demand: i64,
    pub safety_stock: i64,
    pub reorder_point: i64,
    pub order_quantity: OrderQuantity,
    pub z_score: f64,
    pub annual_holding_cost: f64,
}

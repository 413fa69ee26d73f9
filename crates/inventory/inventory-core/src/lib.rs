//! Inventory Core
//!
//! Implementations of the inventory contracts:
//! - [`normal`]: the standard normal quantile function
//! - [`policy`]: safety stock, reorder point and economic order quantity
//! - [`summary`]: plain-language explanation of a policy

pub mod normal;
pub mod policy;
pub mod summary;

pub use normal::StandardNormal;
pub use policy::{
    demand_statistics, economic_order_quantity, reorder_point, round2, safety_stock,
    ClassicPolicyCalculator, WEEKS_PER_YEAR,
};
pub use summary::explain;

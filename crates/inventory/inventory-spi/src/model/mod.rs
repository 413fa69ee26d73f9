//! Inventory data models.

mod params;
mod policy;

pub use params::PolicyParameters;
pub use policy::{DemandStatistics, InventoryPolicy, OrderQuantity};

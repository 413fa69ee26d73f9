//! Inventory Policy Service Provider Interface
//!
//! Defines the business parameters of a replenishment policy, the policy
//! value object, and the traits for the quantile function and the policy
//! calculator.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::*;
pub use error::*;
pub use model::*;

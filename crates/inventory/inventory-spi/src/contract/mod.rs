//! Inventory contracts.

mod policy_calculator;
mod quantile_function;

pub use policy_calculator::PolicyCalculator;
pub use quantile_function::QuantileFunction;

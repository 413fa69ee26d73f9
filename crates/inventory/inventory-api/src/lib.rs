//! Inventory Consumer API
//!
//! Default business parameters, recommended input ranges for a
//! presentation layer, and a builder for [`PolicyParameters`].

mod config;

pub use config::{
    default_parameters, outside_recommended_ranges, ParameterRange, PolicyParametersBuilder,
    DEFAULT_HOLDING_COST_PCT, DEFAULT_LEAD_TIME_WEEKS, DEFAULT_ORDERING_COST, DEFAULT_SERVICE_LEVEL_PCT, DEFAULT_UNIT_COST,
    HOLDING_COST_PCT_RANGE, LEAD_TIME_RANGE, ORDERING_COST_RANGE, SERVICE_LEVEL_PCT_RANGE,
    UNIT_COST_RANGE,
};
pub use inventory_spi::PolicyParameters;

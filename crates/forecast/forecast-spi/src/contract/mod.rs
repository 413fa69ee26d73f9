//! Contract module containing the forecaster capability

mod fitted_model;
mod forecaster;

pub use fitted_model::FittedModel;
pub use forecaster::Forecaster;

//! # stats
//!
//! Small numerical toolkit shared by the forecast and inventory crates.
//!
//! - [`descriptive`]: mean and standard deviation of demand series
//! - [`normal`]: the standard normal distribution (CDF and quantile)

pub mod descriptive;
pub mod normal;

pub use descriptive::{mean, sample_std_dev};
pub use normal::{cdf, inverse_cdf};

//! Retail inventory analysis
//!
//! Ties the three stages together for one (store, department) selection:
//! load and merge the raw data, forecast demand over the horizon, then turn
//! the forecast into a replenishment policy.
//!
//! # Example
//!
//! ```rust,ignore
//! use analysis::{AnalysisConfig, InventoryAnalyzer};
//!
//! let config = AnalysisConfig::default();
//! let mut analyzer = InventoryAnalyzer::from_config(&config);
//! let report = analyzer.run(config.selection(), &config.parameters)?;
//! println!("Reorder at {} units", report.policy.reorder_point);
//! ```

mod analyzer;
mod config;
mod error;
mod report;

pub use analyzer::InventoryAnalyzer;
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use report::{AnalysisReport, SelectionOptions};

pub use data_facade::Selection;
pub use inventory_facade::PolicyParameters;

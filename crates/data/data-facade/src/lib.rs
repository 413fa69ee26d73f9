//! Retail Data Facade
//!
//! Unified re-exports for the data module.
//!
//! This facade provides a single entry point for data preparation:
//! - `data_spi` - Records, merged table, source contract and errors
//! - `data_api` - Source location configuration
//! - `data_core` - CSV source, joins, filtering and the dataset cache
//!
//! # Example
//!
//! ```rust,ignore
//! use data_facade::{prepare, select, CsvRetailSource, Selection};
//!
//! let source = CsvRetailSource::from_dir("data/");
//! let dataset = prepare(&source)?;
//! let series = select(&dataset, Selection::new(1, 1));
//! println!("{} weeks of history", series.len());
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;

//! Retail Data Core
//!
//! Implementations for data preparation:
//! - [`csv_source`]: the CSV-backed [`RetailSource`](data_spi::RetailSource)
//! - [`merge`]: left joins producing the merged table
//! - [`filter`]: per-(store, department) selection
//! - [`cache`]: explicitly invalidated cache of the prepared dataset

pub mod cache;
pub mod csv_source;
pub mod filter;
pub mod merge;
mod parse;

pub use cache::DatasetCache;
pub use csv_source::CsvRetailSource;
pub use filter::{filter_series, select};
pub use merge::{merge_tables, prepare};
pub use parse::{parse_date, parse_flag, parse_optional_number};

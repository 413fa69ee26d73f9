//! Retail Data Service Provider Interface
//!
//! Defines the record types read from the sales, feature and store sources,
//! the merged per-(store, department) table, and the contract a raw data
//! source must fulfil.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::RetailSource;
pub use error::{DataError, Result};
pub use model::{
    FileStamp, MergedRow, MergedSeries, RawTables, RetailDataset, SalesRecord, Selection,
    SourceVersion, StoreFeatureRecord, StoreMetadata, StoreType, MARKDOWN_COUNT,
};

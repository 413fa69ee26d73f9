//! Data models for the retail sources and the merged table.

mod merged;
mod records;
mod source;
mod store_type;

pub use merged::{MergedRow, MergedSeries, RetailDataset, Selection};
pub use records::{SalesRecord, StoreFeatureRecord, StoreMetadata, MARKDOWN_COUNT};
pub use source::{FileStamp, RawTables, SourceVersion};
pub use store_type::StoreType;

//! Contract module containing the raw data source trait

mod retail_source;

pub use retail_source::RetailSource;

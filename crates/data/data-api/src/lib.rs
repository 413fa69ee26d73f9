//! Retail Data Consumer API
//!
//! Configuration and builder types for locating the raw retail sources.

pub mod config;

pub use config::{DataConfig, DataConfigBuilder, DEFAULT_DATA_DIR};

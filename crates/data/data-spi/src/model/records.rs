//! Raw records as read from the three sources.

use super::StoreType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of promotional markdown columns in the feature source.
pub const MARKDOWN_COUNT: usize = 5;

/// One week of sales for a store department.
///
/// `weekly_sales` may be negative (returns and corrections).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub store: u32,
    pub dept: u32,
    pub date: NaiveDate,
    pub weekly_sales: f64,
    pub is_holiday: bool,
}

/// Weekly store-level covariates. Any numeric field may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreFeatureRecord {
    pub store: u32,
    pub date: NaiveDate,
    pub temperature: Option<f64>,
    pub fuel_price: Option<f64>,
    pub markdowns: [Option<f64>; MARKDOWN_COUNT],
    pub cpi: Option<f64>,
    pub unemployment: Option<f64>,
    pub is_holiday: bool,
}

/// Static store attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreMetadata {
    pub store: u32,
    pub store_type: StoreType,
    pub size: f64,
}

//! Store format category.

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store type category as published in the store metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StoreType {
    A,
    B,
    C,
}

impl StoreType {
    /// Category used as the encoding baseline (no dummy column).
    pub const BASELINE: StoreType = StoreType::A;

    /// All categories in encoding order.
    pub const ALL: [StoreType; 3] = [StoreType::A, StoreType::B, StoreType::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreType::A => "A",
            StoreType::B => "B",
            StoreType::C => "C",
        }
    }

    /// Name of the one-hot column for this category, e.g. `Type_B`.
    pub fn dummy_column(&self) -> String {
        format!("Type_{}", self.as_str())
    }

    pub fn is_baseline(&self) -> bool {
        *self == Self::BASELINE
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreType {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(StoreType::A),
            "B" | "b" => Ok(StoreType::B),
            "C" | "c" => Ok(StoreType::C),
            other => Err(DataError::InvalidStoreType(other.to_string())),
        }
    }
}

//! Raw table bundle and source versioning.

use super::{SalesRecord, StoreFeatureRecord, StoreMetadata};
use std::path::PathBuf;
use std::time::SystemTime;

/// The three raw tables exactly as loaded, before any join.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    pub sales: Vec<SalesRecord>,
    pub features: Vec<StoreFeatureRecord>,
    pub stores: Vec<StoreMetadata>,
}

/// Size and modification time of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStamp {
    pub path: PathBuf,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

/// Identity of a source's content at a point in time.
///
/// Two equal versions are assumed to load identical tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceVersion {
    /// Where the data lives (directory, URL, ...)
    pub location: String,
    /// Per-file stamps; empty for sources without files
    pub stamps: Vec<FileStamp>,
}

impl SourceVersion {
    pub fn new(location: impl Into<String>, stamps: Vec<FileStamp>) -> Self {
        Self {
            location: location.into(),
            stamps,
        }
    }
}

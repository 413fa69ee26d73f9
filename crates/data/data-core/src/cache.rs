//! Cache of the prepared dataset.
//!
//! The dataset is reloaded only when it was never loaded, when
//! [`DatasetCache::invalidate`] was called, or when the source reports a
//! different [`SourceVersion`].

use crate::merge::prepare;
use data_spi::{Result, RetailDataset, RetailSource, SourceVersion};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
struct Entry {
    version: SourceVersion,
    dataset: Arc<RetailDataset>,
}

/// Holds at most one prepared dataset, keyed by source version.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<Entry>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `source`, loading it if needed.
    pub fn get_or_load(&mut self, source: &dyn RetailSource) -> Result<Arc<RetailDataset>> {
        let version = source.version()?;

        if let Some(entry) = &self.entry {
            if entry.version == version {
                debug!(location = %version.location, "Dataset cache hit");
                return Ok(Arc::clone(&entry.dataset));
            }
            info!(location = %version.location, "Source changed, reloading dataset");
        }

        let dataset = Arc::new(prepare(source)?);
        self.entry = Some(Entry {
            version,
            dataset: Arc::clone(&dataset),
        });
        Ok(dataset)
    }

    /// Drop the cached dataset so the next access reloads.
    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            debug!("Dataset cache invalidated");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.entry.is_some()
    }

    /// Version of the cached dataset, if any.
    pub fn version(&self) -> Option<&SourceVersion> {
        self.entry.as_ref().map(|e| &e.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use data_spi::{DataError, FileStamp, RawTables, SalesRecord};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

    /// Source whose version is a counter the test can bump.
    struct CountingSource {
        generation: AtomicU64,
        loads: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                generation: AtomicU64::new(0),
                loads: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn loads(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    impl RetailSource for CountingSource {
        fn name(&self) -> &str {
            "counting"
        }

        fn version(&self) -> Result<SourceVersion> {
            Ok(SourceVersion::new(
                "memory",
                vec![FileStamp {
                    path: PathBuf::from("train.csv"),
                    len: self.generation.load(Ordering::SeqCst),
                    modified: None,
                }],
            ))
        }

        fn load(&self) -> Result<RawTables> {
            if self.fail {
                return Err(DataError::SourceUnavailable {
                    path: "memory".to_string(),
                    reason: "offline".to_string(),
                });
            }
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(RawTables {
                sales: vec![SalesRecord {
                    store: 1,
                    dept: 1,
                    date: NaiveDate::from_ymd_opt(2010, 2, 5).unwrap(),
                    weekly_sales: 1.0,
                    is_holiday: false,
                }],
                ..RawTables::default()
            })
        }
    }

    #[test]
    fn test_second_access_hits_cache() {
        let source = CountingSource::new();
        let mut cache = DatasetCache::new();
        assert!(!cache.is_loaded());

        let first = cache.get_or_load(&source).unwrap();
        let second = cache.get_or_load(&source).unwrap();

        assert_eq!(source.loads(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let source = CountingSource::new();
        let mut cache = DatasetCache::new();
        cache.get_or_load(&source).unwrap();
        cache.invalidate();
        assert!(!cache.is_loaded());
        assert!(cache.version().is_none());
        cache.get_or_load(&source).unwrap();
        assert_eq!(source.loads(), 2);
    }

    #[test]
    fn test_version_change_forces_reload() {
        let source = CountingSource::new();
        let mut cache = DatasetCache::new();
        cache.get_or_load(&source).unwrap();
        source.generation.fetch_add(1, Ordering::SeqCst);
        cache.get_or_load(&source).unwrap();
        assert_eq!(source.loads(), 2);
        assert_eq!(cache.version().unwrap().stamps[0].len, 1);
    }

    #[test]
    fn test_failed_load_leaves_cache_empty() {
        let mut source = CountingSource::new();
        source.fail = true;
        let mut cache = DatasetCache::new();
        let err = cache.get_or_load(&source).unwrap_err();
        assert!(err.is_unavailable());
        assert!(!cache.is_loaded());
    }
}

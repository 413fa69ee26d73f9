//! End-to-end tests for the data crates
//!
//! Writes CSV files to a temporary directory and runs the full preparation
//! path through the public API.

use data_facade::{
    prepare, select, CsvRetailSource, DataConfigBuilder, DatasetCache, RetailSource, Selection,
    StoreType,
};
use std::fs;
use tempfile::TempDir;

const TRAIN: &str = "Store,Dept,Date,Weekly_Sales,IsHoliday
1,1,2010-02-05,24924.5,FALSE
1,1,2010-02-12,46039.49,TRUE
1,1,2010-02-19,41595.55,FALSE
1,2,2010-02-05,50605.27,FALSE
2,1,2010-02-05,35034.06,FALSE
2,1,2010-02-12,-60.0,TRUE
";

const FEATURES: &str = "Store,Date,Temperature,Fuel_Price,MarkDown1,MarkDown2,MarkDown3,MarkDown4,MarkDown5,CPI,Unemployment,IsHoliday
1,2010-02-05,42.31,2.572,NA,NA,NA,NA,NA,211.0963582,8.106,FALSE
1,2010-02-12,38.51,2.548,NA,NA,NA,NA,NA,211.2421698,8.106,TRUE
1,2010-02-19,39.93,2.514,NA,NA,NA,NA,NA,211.2891429,8.106,FALSE
2,2010-02-05,40.19,2.572,NA,NA,NA,NA,NA,210.7526053,8.324,FALSE
2,2010-02-12,38.49,2.548,NA,NA,NA,NA,NA,210.8979935,8.324,TRUE
";

const STORES: &str = "Store,Type,Size
1,A,151315
2,B,202307
";

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("train.csv"), TRAIN).unwrap();
    fs::write(dir.path().join("features.csv"), FEATURES).unwrap();
    fs::write(dir.path().join("stores.csv"), STORES).unwrap();
    dir
}

#[test]
fn e2e_prepare_from_csv() {
    let dir = data_dir();
    let source = CsvRetailSource::from_dir(dir.path());
    let dataset = prepare(&source).unwrap();

    assert_eq!(dataset.merged.len(), 6);
    assert_eq!(dataset.stores, vec![1, 2]);
    assert_eq!(dataset.departments, vec![1, 2]);
}

#[test]
fn e2e_select_store_department() {
    let dir = data_dir();
    let dataset = prepare(&CsvRetailSource::from_dir(dir.path())).unwrap();

    let series = select(&dataset, Selection::new(2, 1));
    assert_eq!(series.len(), 2);
    assert_eq!(series.weekly_sales(), vec![35034.06, -60.0]);
    assert!(series.iter().all(|r| r.store_type == Some(StoreType::B)));
    assert_eq!(series.rows()[1].demand(), 0.0);
}

#[test]
fn e2e_unknown_selection_is_empty() {
    let dir = data_dir();
    let dataset = prepare(&CsvRetailSource::from_dir(dir.path())).unwrap();
    assert!(select(&dataset, Selection::new(45, 99)).is_empty());
}

#[test]
fn e2e_custom_file_names() {
    let dir = data_dir();
    fs::rename(dir.path().join("train.csv"), dir.path().join("sales.csv")).unwrap();
    let config = DataConfigBuilder::new()
        .data_dir(dir.path())
        .sales_file("sales.csv")
        .build()
        .unwrap();
    let dataset = prepare(&CsvRetailSource::new(config)).unwrap();
    assert_eq!(dataset.merged.len(), 6);
}

#[test]
fn e2e_missing_file_is_unavailable() {
    let dir = data_dir();
    fs::remove_file(dir.path().join("features.csv")).unwrap();
    let source = CsvRetailSource::from_dir(dir.path());
    let err = prepare(&source).unwrap_err();
    assert!(err.is_unavailable());
    assert!(err.to_string().contains("features.csv"));
}

#[test]
fn e2e_cache_reloads_after_file_change() {
    let dir = data_dir();
    let source = CsvRetailSource::from_dir(dir.path());
    let mut cache = DatasetCache::new();

    let first = cache.get_or_load(&source).unwrap();
    assert_eq!(first.merged.len(), 6);
    let version = source.version().unwrap();
    assert_eq!(cache.version(), Some(&version));

    let mut train = TRAIN.to_string();
    train.push_str("2,2,2010-02-19,123.0,FALSE\n");
    fs::write(dir.path().join("train.csv"), train).unwrap();

    // length changed, so the stamp differs regardless of mtime resolution
    let second = cache.get_or_load(&source).unwrap();
    assert_eq!(second.merged.len(), 7);
}

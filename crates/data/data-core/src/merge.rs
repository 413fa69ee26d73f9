//! Left joins producing the merged sales table.
//!
//! Features are joined onto stores first (by store id); sales are then joined
//! onto the enriched features by `(store, date, is_holiday)`. A sales row with
//! no matching feature row keeps all feature columns, including store type and
//! size, as gaps.

use chrono::NaiveDate;
use data_spi::{
    MergedRow, MergedSeries, RawTables, Result, RetailDataset, RetailSource, StoreFeatureRecord,
    StoreMetadata,
};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info, warn};

type FeatureKey = (u32, NaiveDate, bool);

/// Join the raw tables. Row order and count of the sales table are preserved.
///
/// When a key matches more than one row on the right side, the first row in
/// source order is used.
pub fn merge_tables(tables: &RawTables) -> RetailDataset {
    let stores = index_stores(&tables.stores);
    let features = index_features(&tables.features);

    let mut unmatched = 0usize;
    let merged: MergedSeries = tables
        .sales
        .iter()
        .map(|sale| {
            let mut row = MergedRow::sales_only(
                sale.store,
                sale.dept,
                sale.date,
                sale.weekly_sales,
                sale.is_holiday,
            );
            match features.get(&(sale.store, sale.date, sale.is_holiday)) {
                Some(feature) => {
                    row.temperature = feature.temperature;
                    row.fuel_price = feature.fuel_price;
                    row.markdowns = feature.markdowns;
                    row.cpi = feature.cpi;
                    row.unemployment = feature.unemployment;
                    if let Some(meta) = stores.get(&feature.store) {
                        row.store_type = Some(meta.store_type);
                        row.size = Some(meta.size);
                    }
                }
                None => unmatched += 1,
            }
            row
        })
        .collect();

    if unmatched > 0 {
        debug!(unmatched, "Sales rows without matching feature row");
    }

    let store_ids: BTreeSet<u32> = tables.sales.iter().map(|s| s.store).collect();
    let dept_ids: BTreeSet<u32> = tables.sales.iter().map(|s| s.dept).collect();

    RetailDataset {
        merged,
        stores: store_ids.into_iter().collect(),
        departments: dept_ids.into_iter().collect(),
    }
}

/// Load all three tables from `source` and merge them.
pub fn prepare(source: &dyn RetailSource) -> Result<RetailDataset> {
    let tables = source.load()?;
    let dataset = merge_tables(&tables);
    info!(
        source = source.name(),
        rows = dataset.merged.len(),
        stores = dataset.stores.len(),
        departments = dataset.departments.len(),
        "Prepared retail dataset"
    );
    Ok(dataset)
}

fn index_stores(stores: &[StoreMetadata]) -> HashMap<u32, &StoreMetadata> {
    let mut index = HashMap::with_capacity(stores.len());
    for meta in stores {
        match index.entry(meta.store) {
            Entry::Vacant(slot) => {
                slot.insert(meta);
            }
            Entry::Occupied(_) => warn!(store = meta.store, "Duplicate store metadata row ignored"),
        }
    }
    index
}

fn index_features(features: &[StoreFeatureRecord]) -> HashMap<FeatureKey, &StoreFeatureRecord> {
    let mut index = HashMap::with_capacity(features.len());
    let mut duplicates = 0usize;
    for feature in features {
        match index.entry((feature.store, feature.date, feature.is_holiday)) {
            Entry::Vacant(slot) => {
                slot.insert(feature);
            }
            Entry::Occupied(_) => duplicates += 1,
        }
    }
    if duplicates > 0 {
        warn!(duplicates, "Duplicate feature rows ignored");
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_spi::{SalesRecord, StoreType, MARKDOWN_COUNT};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2010, 2, d).unwrap()
    }

    fn sale(store: u32, dept: u32, d: u32, sales: f64, holiday: bool) -> SalesRecord {
        SalesRecord {
            store,
            dept,
            date: date(d),
            weekly_sales: sales,
            is_holiday: holiday,
        }
    }

    fn feature(store: u32, d: u32, holiday: bool, temperature: f64) -> StoreFeatureRecord {
        StoreFeatureRecord {
            store,
            date: date(d),
            temperature: Some(temperature),
            fuel_price: Some(2.5),
            markdowns: [None; MARKDOWN_COUNT],
            cpi: Some(211.0),
            unemployment: Some(8.1),
            is_holiday: holiday,
        }
    }

    fn tables() -> RawTables {
        RawTables {
            sales: vec![
                sale(2, 1, 5, 100.0, false),
                sale(1, 3, 5, 200.0, false),
                sale(1, 1, 12, -5.0, true),
            ],
            features: vec![
                feature(1, 5, false, 40.0),
                feature(1, 12, true, 38.0),
                feature(2, 5, false, 50.0),
            ],
            stores: vec![
                StoreMetadata { store: 1, store_type: StoreType::A, size: 151315.0 },
                StoreMetadata { store: 2, store_type: StoreType::B, size: 202307.0 },
            ],
        }
    }

    #[test]
    fn test_merge_preserves_sales_order_and_count() {
        let dataset = merge_tables(&tables());
        let rows = dataset.merged.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].store, rows[0].dept), (2, 1));
        assert_eq!((rows[1].store, rows[1].dept), (1, 3));
        assert_eq!(rows[2].weekly_sales, -5.0);
    }

    #[test]
    fn test_merge_attaches_features_and_metadata() {
        let dataset = merge_tables(&tables());
        let row = &dataset.merged.rows()[0];
        assert_eq!(row.temperature, Some(50.0));
        assert_eq!(row.store_type, Some(StoreType::B));
        assert_eq!(row.size, Some(202307.0));
    }

    #[test]
    fn test_holiday_flag_is_part_of_the_key() {
        let mut raw = tables();
        raw.sales.push(sale(1, 1, 12, 10.0, false));
        let dataset = merge_tables(&raw);
        let row = &dataset.merged.rows()[3];
        assert_eq!(row.temperature, None);
        // type and size only arrive through a feature match
        assert_eq!(row.store_type, None);
        assert_eq!(row.size, None);
    }

    #[test]
    fn test_first_duplicate_feature_wins() {
        let mut raw = tables();
        raw.features.push(feature(2, 5, false, 99.0));
        let dataset = merge_tables(&raw);
        assert_eq!(dataset.merged.rows()[0].temperature, Some(50.0));
    }

    #[test]
    fn test_distinct_ids_sorted() {
        let dataset = merge_tables(&tables());
        assert_eq!(dataset.stores, vec![1, 2]);
        assert_eq!(dataset.departments, vec![1, 3]);
    }

    #[test]
    fn test_empty_tables() {
        let dataset = merge_tables(&RawTables::default());
        assert!(dataset.merged.is_empty());
        assert!(dataset.stores.is_empty());
        assert!(dataset.departments.is_empty());
    }
}

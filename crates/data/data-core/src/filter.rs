//! Per-(store, department) selection of the merged table.

use data_spi::{MergedSeries, RetailDataset, Selection};
use tracing::debug;

/// Rows of `merged` for the given store and department, in source order.
///
/// The result is an independent copy; an empty series is a valid answer.
pub fn filter_series(merged: &MergedSeries, store: u32, dept: u32) -> MergedSeries {
    let selection = Selection::new(store, dept);
    let series: MergedSeries = merged
        .iter()
        .filter(|row| selection.matches(row))
        .cloned()
        .collect();
    debug!(store, dept, rows = series.len(), "Filtered merged table");
    series
}

/// [`filter_series`] over a prepared dataset.
pub fn select(dataset: &RetailDataset, selection: Selection) -> MergedSeries {
    filter_series(&dataset.merged, selection.store, selection.dept)
}

//! The denormalized sales table consumed by the forecast stage.

use super::{StoreType, MARKDOWN_COUNT};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sales row enriched with the matching store features and metadata.
///
/// Identifiers and date are always present; every feature column may be a
/// gap when the feature source had no row for `(store, date, is_holiday)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    pub store: u32,
    pub dept: u32,
    pub date: NaiveDate,
    pub weekly_sales: f64,
    pub is_holiday: bool,
    pub temperature: Option<f64>,
    pub fuel_price: Option<f64>,
    pub markdowns: [Option<f64>; MARKDOWN_COUNT],
    pub cpi: Option<f64>,
    pub unemployment: Option<f64>,
    pub store_type: Option<StoreType>,
    pub size: Option<f64>,
}

impl MergedRow {
    /// Row with only the sales columns populated.
    pub fn sales_only(store: u32, dept: u32, date: NaiveDate, weekly_sales: f64, is_holiday: bool) -> Self {
        Self {
            store,
            dept,
            date,
            weekly_sales,
            is_holiday,
            temperature: None,
            fuel_price: None,
            markdowns: [None; MARKDOWN_COUNT],
            cpi: None,
            unemployment: None,
            store_type: None,
            size: None,
        }
    }

    /// Weekly sales floored at zero, i.e. the demand the row represents.
    pub fn demand(&self) -> f64 {
        self.weekly_sales.max(0.0)
    }
}

/// An owned, ordered collection of merged rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedSeries {
    rows: Vec<MergedRow>,
}

impl MergedSeries {
    pub fn new(rows: Vec<MergedRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[MergedRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<MergedRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MergedRow> {
        self.rows.iter()
    }

    /// Mutable access; the series owns its rows so edits never leak into
    /// the table it was selected from.
    pub fn rows_mut(&mut self) -> &mut [MergedRow] {
        &mut self.rows
    }

    /// Raw weekly sales in row order.
    pub fn weekly_sales(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.weekly_sales).collect()
    }

    /// Dates in row order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.date).collect()
    }
}

impl FromIterator<MergedRow> for MergedSeries {
    fn from_iter<I: IntoIterator<Item = MergedRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MergedSeries {
    type Item = &'a MergedRow;
    type IntoIter = std::slice::Iter<'a, MergedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// A (store, department) pair chosen for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub store: u32,
    pub dept: u32,
}

impl Selection {
    pub fn new(store: u32, dept: u32) -> Self {
        Self { store, dept }
    }

    pub fn matches(&self, row: &MergedRow) -> bool {
        row.store == self.store && row.dept == self.dept
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Store {} | Department {}", self.store, self.dept)
    }
}

/// Output of data preparation: the merged table and its distinct ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetailDataset {
    pub merged: MergedSeries,
    /// Distinct store ids, ascending
    pub stores: Vec<u32>,
    /// Distinct department ids, ascending
    pub departments: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_demand_clamps_returns() {
        let row = MergedRow::sales_only(1, 1, date(2010, 2, 5), -120.5, false);
        assert_eq!(row.demand(), 0.0);
        let row = MergedRow::sales_only(1, 1, date(2010, 2, 5), 24924.5, false);
        assert_eq!(row.demand(), 24924.5);
    }

    #[test]
    fn test_series_accessors() {
        let series: MergedSeries = vec![
            MergedRow::sales_only(1, 1, date(2010, 2, 5), 10.0, false),
            MergedRow::sales_only(1, 1, date(2010, 2, 12), 20.0, true),
        ]
        .into_iter()
        .collect();

        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert_eq!(series.weekly_sales(), vec![10.0, 20.0]);
        assert_eq!(series.dates(), vec![date(2010, 2, 5), date(2010, 2, 12)]);
    }

    #[test]
    fn test_selection_matches() {
        let selection = Selection::new(1, 3);
        assert!(selection.matches(&MergedRow::sales_only(1, 3, date(2010, 2, 5), 1.0, false)));
        assert!(!selection.matches(&MergedRow::sales_only(1, 4, date(2010, 2, 5), 1.0, false)));
        assert!(!selection.matches(&MergedRow::sales_only(2, 3, date(2010, 2, 5), 1.0, false)));
    }

    #[test]
    fn test_selection_display() {
        assert_eq!(Selection::new(4, 17).to_string(), "Store 4 | Department 17");
    }
}

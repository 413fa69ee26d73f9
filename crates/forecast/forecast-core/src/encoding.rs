//! One-hot encoding of the store type.

use data_spi::StoreType;
use forecast_spi::Column;

/// Dummy columns for the non-baseline store types present in `types`.
///
/// The baseline type never gets a column. A row with unknown type is 0 in
/// every dummy. Columns follow [`StoreType::ALL`] order.
pub fn store_type_dummies(types: &[Option<StoreType>]) -> Vec<Column> {
    StoreType::ALL
        .iter()
        .filter(|t| !t.is_baseline())
        .filter(|&&t| types.contains(&Some(t)))
        .map(|&t| {
            let values = types
                .iter()
                .map(|row| if *row == Some(t) { 1.0 } else { 0.0 })
                .collect();
            Column::new(t.dummy_column(), values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_only_has_no_dummies() {
        assert!(store_type_dummies(&[Some(StoreType::A), Some(StoreType::A)]).is_empty());
    }

    #[test]
    fn test_single_non_baseline_type() {
        let columns = store_type_dummies(&[Some(StoreType::B), None, Some(StoreType::B)]);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].name, "Type_B");
        assert_eq!(columns[0].values, vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_both_non_baseline_types_in_order() {
        let columns = store_type_dummies(&[
            Some(StoreType::C),
            Some(StoreType::A),
            Some(StoreType::B),
        ]);
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Type_B", "Type_C"]);
        assert_eq!(columns[0].values, vec![0.0, 0.0, 1.0]);
        assert_eq!(columns[1].values, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unknown_types_only() {
        assert!(store_type_dummies(&[None, None]).is_empty());
    }
}

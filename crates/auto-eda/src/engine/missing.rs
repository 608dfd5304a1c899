//! Missing-value counting across every column of the table.

use crate::types::{MissingValues, OrderedMap};
use polars::prelude::*;

/// Count missing entries per column, keeping only columns with at least one.
pub(crate) fn missing_counts(df: &DataFrame) -> MissingValues {
    df.get_columns()
        .iter()
        .map(|col| (col.name().to_string(), col.null_count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Convert missing counts into percentages of the table's row count.
pub(crate) fn as_percentages(counts: &MissingValues, row_count: usize) -> OrderedMap<f64> {
    counts
        .iter()
        .map(|(name, count)| {
            let pct = if row_count > 0 {
                (*count as f64 / row_count as f64) * 100.0
            } else {
                0.0
            };
            (name.to_string(), pct)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_positive_counts_reported() {
        let df = df![
            "A" => [Some(1i64), Some(2), Some(3)],
            "B" => [Some("x"), None, None],
            "C" => [Some(1.1), None, Some(3.3)],
        ]
        .unwrap();

        let counts = missing_counts(&df);
        assert_eq!(counts.keys().collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(counts["B"], 2);
        assert_eq!(counts["C"], 1);
        assert!(counts.values().all(|c| *c > 0));
    }

    #[test]
    fn test_percentages_use_row_count() {
        let mut counts = MissingValues::new();
        counts.insert("C", 1);
        let pct = as_percentages(&counts, 5);
        assert!((pct["C"] - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_frame_has_no_missing() {
        let counts = missing_counts(&DataFrame::empty());
        assert!(counts.is_empty());
    }
}

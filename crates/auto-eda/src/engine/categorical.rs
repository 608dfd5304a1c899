//! Frequency counting for categorical columns.

use crate::types::{CategoricalSummary, OrderedMap};
use std::collections::HashMap;

/// Count present values, most frequent first.
///
/// Ties keep the order in which values first appear in the column, so the
/// ranking is reproducible.
pub(crate) fn frequency_table<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values.into_iter().flatten() {
        match positions.get(value) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    // sort_by is stable: equal counts stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Summarize a categorical column: distinct count plus the `top_n` most
/// frequent values.
pub(crate) fn summarize<'a, I>(values: I, top_n: usize) -> CategoricalSummary
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let table = frequency_table(values);
    let unique_count = table.len();
    let top_freq: OrderedMap<usize> = table.into_iter().take(top_n).collect();

    CategoricalSummary {
        unique_count,
        top_freq,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(values: &[&'static str]) -> Vec<Option<&'static str>> {
        values.iter().map(|v| Some(*v)).collect()
    }

    #[test]
    fn test_frequency_table_counts_and_orders() {
        let table = frequency_table(present(&["x", "y", "x", "z", "x"]));
        assert_eq!(
            table,
            vec![
                ("x".to_string(), 3),
                ("y".to_string(), 1),
                ("z".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_ties_break_by_first_occurrence() {
        let table = frequency_table(present(&["b", "a", "c", "a", "b", "c"]));
        let order: Vec<&str> = table.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_missing_values_are_not_counted() {
        let values = vec![Some("x"), None, Some("x"), None];
        let summary = summarize(values, 3);
        assert_eq!(summary.unique_count, 1);
        assert_eq!(summary.top_freq["x"], 2);
        assert_eq!(summary.top_freq.len(), 1);
    }

    #[test]
    fn test_summary_keeps_top_n_only() {
        let summary = summarize(present(&["a", "b", "c", "d", "d"]), 3);
        assert_eq!(summary.unique_count, 4);
        assert_eq!(
            summary.top_freq.keys().collect::<Vec<_>>(),
            vec!["d", "a", "b"]
        );
    }

    #[test]
    fn test_all_missing_column() {
        let summary = summarize(vec![None, None], 3);
        assert_eq!(summary.unique_count, 0);
        assert!(summary.top_freq.is_empty());
    }
}

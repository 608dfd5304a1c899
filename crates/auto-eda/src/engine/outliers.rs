//! Univariate outlier detection with the IQR method.
//!
//! Q1 and Q3 come from the same interpolated quantiles as the descriptive
//! statistics. A value is an outlier when it lies strictly below
//! `Q1 - k * IQR` or strictly above `Q3 + k * IQR`. Small columns are not
//! special-cased, and a constant column (IQR = 0) flags every value that
//! differs from the constant.

use super::statistics::{quantile_sorted, sorted};
use crate::types::OutlierBounds;

/// Compute the IQR fences of a column's present values and count the
/// values outside them. Returns `None` when there is no present value.
pub(crate) fn iqr_bounds(values: &[f64], multiplier: f64) -> Option<OutlierBounds> {
    if values.is_empty() {
        return None;
    }

    let sorted = sorted(values);
    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;

    let lower_bound = q1 - multiplier * iqr;
    let upper_bound = q3 + multiplier * iqr;

    let outlier_count = values
        .iter()
        .filter(|v| **v < lower_bound || **v > upper_bound)
        .count();

    Some(OutlierBounds {
        q1,
        q3,
        iqr,
        lower_bound,
        upper_bound,
        outlier_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_spike_is_flagged() {
        let bounds = iqr_bounds(&[10.0, 100.0, 10.0, 10.0, 10.0], 1.5).unwrap();
        assert_eq!(bounds.q1, 10.0);
        assert_eq!(bounds.q3, 10.0);
        assert_eq!(bounds.iqr, 0.0);
        assert_eq!(bounds.outlier_count, 1);
    }

    #[test]
    fn test_interpolated_bounds() {
        // Q1 = 3.25, Q3 = 7.75 (index 2.25 and 6.75), IQR = 4.5
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let bounds = iqr_bounds(&values, 1.5).unwrap();
        assert!((bounds.q1 - 3.25).abs() < 1e-12);
        assert!((bounds.q3 - 7.75).abs() < 1e-12);
        assert!((bounds.lower_bound - (3.25 - 6.75)).abs() < 1e-12);
        assert!((bounds.upper_bound - (7.75 + 6.75)).abs() < 1e-12);
        assert_eq!(bounds.outlier_count, 1);
    }

    #[test]
    fn test_no_outliers_in_uniform_range() {
        let bounds = iqr_bounds(&[1.0, 2.0, 3.0, 4.0, 5.0], 1.5).unwrap();
        assert_eq!(bounds.outlier_count, 0);
    }

    #[test]
    fn test_values_on_the_fence_are_not_outliers() {
        // Q1 = 2, Q3 = 4, IQR = 2 -> fences at -1 and 7
        let bounds = iqr_bounds(&[-1.0, 2.0, 3.0, 4.0, 7.0], 1.5).unwrap();
        assert_eq!(bounds.lower_bound, -1.0);
        assert_eq!(bounds.upper_bound, 7.0);
        assert_eq!(bounds.outlier_count, 0);
    }

    #[test]
    fn test_small_sample_still_uses_interpolation() {
        // Three values: Q1 = 1.5, Q3 = 51, IQR = 49.5; nothing escapes the fences.
        let bounds = iqr_bounds(&[1.0, 2.0, 100.0], 1.5).unwrap();
        assert!((bounds.q1 - 1.5).abs() < 1e-12);
        assert!((bounds.q3 - 51.0).abs() < 1e-12);
        assert_eq!(bounds.outlier_count, 0);
    }

    #[test]
    fn test_constant_column_has_no_outliers() {
        let bounds = iqr_bounds(&[5.0, 5.0, 5.0, 5.0], 1.5).unwrap();
        assert_eq!(bounds.outlier_count, 0);
    }

    #[test]
    fn test_larger_multiplier_widens_fences() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 20.0];
        let narrow = iqr_bounds(&values, 1.5).unwrap();
        let wide = iqr_bounds(&values, 3.0).unwrap();
        assert_eq!(narrow.outlier_count, 1);
        assert_eq!(wide.outlier_count, 0);
    }

    #[test]
    fn test_empty_column_has_no_bounds() {
        assert!(iqr_bounds(&[], 1.5).is_none());
    }
}

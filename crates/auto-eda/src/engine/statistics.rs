//! Descriptive statistics over the present values of a numeric column.
//!
//! Conventions: percentiles use linear interpolation at index `p * (n - 1)`
//! of the sorted values, the standard deviation uses the `n - 1`
//! denominator, and anything undefined is `NaN`.

use crate::types::ColumnStats;

/// Sort values ascending. `NaN` values sort last.
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Arithmetic mean, `NaN` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (`n - 1` denominator), `NaN` with fewer than two values.
pub(crate) fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let mean = mean(values);
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0)
}

/// Sample standard deviation, `NaN` with fewer than two values.
pub(crate) fn sample_std(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Linearly interpolated quantile of an ascending slice.
///
/// `quantile` is in `[0, 1]`; the result is `NaN` for an empty slice.
pub(crate) fn quantile_sorted(values: &[f64], quantile: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let pos = quantile.clamp(0.0, 1.0) * (values.len() as f64 - 1.0);
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return values[lower];
    }
    let weight = pos - lower as f64;
    values[lower] + (values[upper] - values[lower]) * weight
}

/// Compute the `describe`-style statistics of a column's present values.
pub(crate) fn describe(values: &[f64]) -> ColumnStats {
    if values.is_empty() {
        return ColumnStats::empty();
    }

    let sorted = sorted(values);
    ColumnStats {
        count: values.len(),
        mean: mean(values),
        std: sample_std(values),
        min: sorted[0],
        p25: quantile_sorted(&sorted, 0.25),
        p50: quantile_sorted(&sorted, 0.5),
        p75: quantile_sorted(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    }
}

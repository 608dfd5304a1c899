//! Pearson correlation with pairwise-complete observations.

use crate::types::{CorrelationMatrix, OrderedMap};
use anofox_statistics::correlation::pearson as pearson_test;
use tracing::debug;

/// Pearson coefficient of two aligned columns.
///
/// Only rows where both values are present are used. Returns `NaN` with
/// fewer than two complete pairs or when either side has zero variance.
pub(crate) fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let mut xs = Vec::with_capacity(x.len());
    let mut ys = Vec::with_capacity(y.len());
    for (a, b) in x.iter().zip(y.iter()) {
        if let (Some(a), Some(b)) = (a, b) {
            xs.push(*a);
            ys.push(*b);
        }
    }

    if xs.len() < 2 || is_constant(&xs) || is_constant(&ys) {
        return f64::NAN;
    }

    // two distinct points are always perfectly (anti-)correlated
    if xs.len() == 2 {
        return ((xs[1] - xs[0]) * (ys[1] - ys[0])).signum();
    }

    match pearson_test(&xs, &ys, None) {
        Ok(result) => result.estimate.clamp(-1.0, 1.0),
        Err(e) => {
            debug!("Pearson correlation failed on {} pairs: {:?}", xs.len(), e);
            f64::NAN
        }
    }
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Diagonal entry: 1.0 for a column with nonzero variance, `NaN` otherwise.
fn self_correlation(values: &[Option<f64>]) -> f64 {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.len() < 2 || is_constant(&present) {
        f64::NAN
    } else {
        1.0
    }
}

/// Full symmetric correlation matrix over named, aligned columns.
pub(crate) fn correlation_matrix(columns: &[(String, Vec<Option<f64>>)]) -> CorrelationMatrix {
    let size = columns.len();
    let mut values = vec![vec![f64::NAN; size]; size];

    for i in 0..size {
        values[i][i] = self_correlation(&columns[i].1);
        for j in (i + 1)..size {
            let r = pearson(&columns[i].1, &columns[j].1);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    columns
        .iter()
        .zip(values)
        .map(|((name, _), row)| {
            let row: OrderedMap<f64> = columns
                .iter()
                .map(|(other, _)| other.clone())
                .zip(row)
                .collect();
            (name.clone(), row)
        })
        .collect()
}

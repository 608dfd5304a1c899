//! Chart data for the presentation layer.
//!
//! The engine never rasterizes anything. [`Visualizer`] turns analysis
//! results into plain, serializable chart artifacts (histogram bins, a
//! correlation heatmap, category counts, pair plot panels) that a renderer
//! such as [`crate::reporting::svg`] can draw.

mod types;

pub use types::{
    CategoryChart, CategoryCount, HeatmapMatrix, Histogram, HistogramBin, PairPlot, ScatterPanel,
    ScatterPoint,
};

use crate::engine::{EdaEngine, frequency_table, sorted};
use crate::error::{EdaError, Result, ResultExt};
use crate::types::ColumnKind;
use tracing::debug;

/// Builds chart data from an engine's table.
pub struct Visualizer<'a> {
    engine: &'a EdaEngine,
}

impl<'a> Visualizer<'a> {
    pub fn new(engine: &'a EdaEngine) -> Self {
        Self { engine }
    }

    /// Histograms for the given numeric columns (all numeric columns when
    /// `columns` is `None`).
    pub fn histograms(&self, columns: Option<&[&str]>) -> Result<Vec<Histogram>> {
        let names = self.resolve(columns, ColumnKind::Numeric)?;
        let bins = self.engine.config().histogram_bins;

        let mut histograms = Vec::with_capacity(names.len());
        for name in names {
            let values = sorted(&self.engine.present_numeric_values(&name)?);
            histograms.push(Histogram {
                bins: build_histogram(&values, bins),
                column: name,
            });
        }
        Ok(histograms)
    }

    /// Heatmap of the correlation matrix, `None` without numeric columns.
    pub fn correlation_heatmap(&self) -> Result<Option<HeatmapMatrix>> {
        let corr = self.engine.correlations()?;
        if corr.is_empty() {
            return Ok(None);
        }

        let labels: Vec<String> = corr.keys().map(str::to_string).collect();
        let values = corr
            .values()
            .map(|row| row.values().copied().collect())
            .collect();
        Ok(Some(HeatmapMatrix { labels, values }))
    }

    /// Most frequent categories per categorical column (all categorical
    /// columns when `columns` is `None`), capped at the configured limit.
    pub fn category_counts(&self, columns: Option<&[&str]>) -> Result<Vec<CategoryChart>> {
        let names = self.resolve(columns, ColumnKind::Categorical)?;
        let limit = self.engine.config().chart_category_limit;

        let mut charts = Vec::with_capacity(names.len());
        for name in names {
            let series = self.engine.text_series(&name)?;
            let values = series.str().context(format!("Reading column '{name}'"))?;
            let table = frequency_table(values.into_iter());
            let total: usize = table.iter().map(|(_, count)| count).sum();

            let counts = table
                .into_iter()
                .take(limit)
                .map(|(value, count)| CategoryCount {
                    value,
                    count,
                    percentage: (count as f64 / total as f64) * 100.0,
                })
                .collect();
            charts.push(CategoryChart {
                column: name,
                counts,
            });
        }
        Ok(charts)
    }

    /// Scatter panels for every ordered pair of distinct numeric columns.
    ///
    /// At most `pair_plot_max_columns` columns are used. With a `hue`
    /// column, rows where the hue is missing are dropped and every point
    /// carries its group label. Returns `None` with fewer than two columns.
    pub fn pair_plot(
        &self,
        columns: Option<&[&str]>,
        hue: Option<&str>,
    ) -> Result<Option<PairPlot>> {
        let mut names = self.resolve(columns, ColumnKind::Numeric)?;
        if names.len() < 2 {
            return Ok(None);
        }
        names.truncate(self.engine.config().pair_plot_max_columns);

        let groups: Option<Vec<Option<String>>> = match hue {
            Some(hue_name) => {
                if self.engine.column_kind(hue_name).is_none() {
                    return Err(EdaError::ColumnNotFound(hue_name.to_string()));
                }
                let series = self.engine.text_series(hue_name)?;
                let values = series
                    .str()
                    .context(format!("Reading column '{hue_name}'"))?;
                Some(values.into_iter().map(|v| v.map(str::to_string)).collect())
            }
            None => None,
        };

        let mut data = Vec::with_capacity(names.len());
        for name in &names {
            data.push(self.engine.numeric_values(name)?);
        }

        let mut panels = Vec::new();
        for (i, x_name) in names.iter().enumerate() {
            for (j, y_name) in names.iter().enumerate() {
                if i == j {
                    continue;
                }
                let points = data[i]
                    .iter()
                    .zip(data[j].iter())
                    .enumerate()
                    .filter_map(|(row, pair)| {
                        let group = match &groups {
                            Some(labels) => Some(labels[row].clone()?),
                            None => None,
                        };
                        match pair {
                            (Some(x), Some(y)) => Some(ScatterPoint {
                                x: *x,
                                y: *y,
                                group,
                            }),
                            _ => None,
                        }
                    })
                    .collect();
                panels.push(ScatterPanel {
                    x: x_name.clone(),
                    y: y_name.clone(),
                    points,
                });
            }
        }

        debug!("Built pair plot with {} panels", panels.len());
        Ok(Some(PairPlot {
            columns: names,
            hue: hue.map(str::to_string),
            panels,
        }))
    }

    /// Explicit column list (validated against `kind`) or every column of
    /// that kind.
    fn resolve(&self, columns: Option<&[&str]>, kind: ColumnKind) -> Result<Vec<String>> {
        match columns {
            None => Ok(self
                .engine
                .columns()
                .iter()
                .filter(|c| c.kind == kind)
                .map(|c| c.name.clone())
                .collect()),
            Some(requested) => requested
                .iter()
                .map(|name| match self.engine.column_kind(name) {
                    Some(k) if k == kind => Ok(name.to_string()),
                    Some(_) => Err(EdaError::ColumnNotFound(name.to_string())
                        .with_context(format!("'{name}' is not a {} column", kind.display_name()))),
                    None => Err(EdaError::ColumnNotFound(name.to_string())),
                })
                .collect(),
        }
    }
}

/// Equal-width histogram of ascending values.
fn build_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.first().copied().unwrap_or(0.0);
    let max = values.last().copied().unwrap_or(min);
    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let bin_count = bins.max(1);
    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];

    for value in values {
        let mut index = ((value - min) / width) as usize;
        if index >= bin_count {
            index = bin_count - 1;
        }
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            start: min + idx as f64 * width,
            end: min + (idx as f64 + 1.0) * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use polars::prelude::*;

    fn engine() -> EdaEngine {
        let df = df![
            "A" => [1.0, 2.0, 3.0, 4.0, 5.0],
            "B" => ["x", "y", "x", "z", "x"],
            "C" => [Some(1.1), Some(2.2), None, Some(4.4), Some(5.5)],
            "G" => [Some("g1"), Some("g2"), Some("g1"), None, Some("g2")],
        ]
        .unwrap();
        let config = EngineConfig::builder().histogram_bins(4).build().unwrap();
        EdaEngine::with_config(df, config).unwrap()
    }

    // ==================== build_histogram tests ====================

    #[test]
    fn test_histogram_counts_all_values() {
        let bins = build_histogram(&[1.0, 2.0, 3.0, 4.0, 5.0], 4);
        assert_eq!(bins.len(), 4);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 5);
        assert_eq!(bins[0].start, 1.0);
        assert_eq!(bins[3].end, 5.0);
        // the maximum lands in the last bin
        assert_eq!(bins[3].count, 2);
    }

    #[test]
    fn test_histogram_constant_values() {
        let bins = build_histogram(&[3.0, 3.0, 3.0], 10);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }

    #[test]
    fn test_histogram_empty() {
        assert!(build_histogram(&[], 10).is_empty());
    }

    // ==================== Visualizer tests ====================

    #[test]
    fn test_histograms_default_columns() {
        let engine = engine();
        let histograms = Visualizer::new(&engine).histograms(None).unwrap();
        let columns: Vec<&str> = histograms.iter().map(|h| h.column.as_str()).collect();
        assert_eq!(columns, vec!["A", "C"]);
        assert_eq!(histograms[1].bins.iter().map(|b| b.count).sum::<usize>(), 4);
    }

    #[test]
    fn test_histograms_reject_categorical_column() {
        let engine = engine();
        let result = Visualizer::new(&engine).histograms(Some(&["B"]));
        assert_eq!(result.unwrap_err().error_code(), "COLUMN_NOT_FOUND");
    }

    #[test]
    fn test_histograms_unknown_column() {
        let engine = engine();
        let result = Visualizer::new(&engine).histograms(Some(&["missing"]));
        assert!(matches!(result, Err(EdaError::ColumnNotFound(_))));
    }

    #[test]
    fn test_heatmap_matches_correlations() {
        let engine = engine();
        let heatmap = Visualizer::new(&engine).correlation_heatmap().unwrap().unwrap();
        assert_eq!(heatmap.labels, vec!["A".to_string(), "C".to_string()]);
        assert_eq!(heatmap.values[0][0], 1.0);
        assert_eq!(heatmap.values[0][1], heatmap.values[1][0]);
    }

    #[test]
    fn test_heatmap_none_without_numeric_columns() {
        let engine = EdaEngine::new(df!["B" => ["x"]].unwrap()).unwrap();
        assert!(Visualizer::new(&engine).correlation_heatmap().unwrap().is_none());
    }

    #[test]
    fn test_category_counts() {
        let engine = engine();
        let charts = Visualizer::new(&engine).category_counts(Some(&["B"])).unwrap();
        assert_eq!(charts.len(), 1);
        let counts = &charts[0].counts;
        assert_eq!(counts[0].value, "x");
        assert_eq!(counts[0].count, 3);
        assert!((counts[0].percentage - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_category_counts_respect_limit() {
        let values: Vec<String> = (0..30).map(|i| format!("v{i}")).collect();
        let df = df!["many" => values].unwrap();
        let engine = EdaEngine::new(df).unwrap();
        let charts = Visualizer::new(&engine).category_counts(None).unwrap();
        assert_eq!(charts[0].counts.len(), 20);
    }

    #[test]
    fn test_pair_plot_panels() {
        let engine = engine();
        let plot = Visualizer::new(&engine).pair_plot(None, None).unwrap().unwrap();
        assert_eq!(plot.columns, vec!["A".to_string(), "C".to_string()]);
        assert_eq!(plot.panels.len(), 2);
        // the row where C is missing is skipped
        assert_eq!(plot.panels[0].points.len(), 4);
    }

    #[test]
    fn test_pair_plot_with_hue_drops_missing_groups() {
        let engine = engine();
        let plot = Visualizer::new(&engine)
            .pair_plot(Some(&["A", "C"]), Some("G"))
            .unwrap()
            .unwrap();
        // row 2 (C missing) and row 3 (G missing) are gone
        let panel = &plot.panels[0];
        assert_eq!(panel.points.len(), 3);
        assert!(panel.points.iter().all(|p| p.group.is_some()));
        assert_eq!(plot.hue.as_deref(), Some("G"));
    }

    #[test]
    fn test_pair_plot_needs_two_columns() {
        let engine = engine();
        let plot = Visualizer::new(&engine).pair_plot(Some(&["A"]), None).unwrap();
        assert!(plot.is_none());
    }
}

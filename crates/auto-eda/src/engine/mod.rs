//! The statistical analysis engine.
//!
//! [`EdaEngine`] owns an immutable table and exposes five independent,
//! read-only analyses:
//! - Descriptive statistics for numeric columns
//! - Missing-value counts for every column
//! - Frequency summaries for categorical columns
//! - Pearson correlation matrix across numeric columns
//! - IQR outlier counts for numeric columns
//!
//! Columns are classified once, when the engine is built. Every analysis is
//! recomputed on each call and leaves the table untouched.

mod categorical;
mod classifier;
mod correlation;
mod missing;
mod outliers;
mod statistics;

pub use classifier::{classify_dtype, is_categorical_dtype, is_numeric_dtype};

pub(crate) use categorical::frequency_table;
pub(crate) use statistics::sorted;

use crate::config::EngineConfig;
use crate::error::{EdaError, Result, ResultExt};
use crate::loader::{TableSource, load_table};
use crate::types::{
    BasicStats, CategoricalSummaries, ClassifiedColumn, ColumnKind, CorrelationMatrix,
    MissingValues, OrderedMap, OutlierBounds, OutlierCounts,
};
use polars::prelude::*;
use tracing::{debug, info};

/// Automated exploratory analysis over one in-memory table.
pub struct EdaEngine {
    df: DataFrame,
    columns: Vec<ClassifiedColumn>,
    config: EngineConfig,
}

static_assertions::assert_impl_all!(EdaEngine: Send, Sync);

impl EdaEngine {
    /// Build an engine with the default configuration.
    ///
    /// Accepts a path (`&str`, `String`, `&Path`, `PathBuf`) or a `DataFrame`.
    pub fn new(source: impl Into<TableSource>) -> Result<Self> {
        Self::with_config(source, EngineConfig::default())
    }

    /// Build an engine with a custom configuration.
    pub fn with_config(source: impl Into<TableSource>, config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let df = match source.into() {
            TableSource::Path(path) => load_table(&path, &config)?,
            TableSource::Frame(df) => df,
        };

        let columns = classifier::classify_columns(&df);
        let numeric = columns.iter().filter(|c| c.kind == ColumnKind::Numeric).count();
        let categorical = columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Categorical)
            .count();
        info!(
            "Engine ready: {} rows, {} columns ({} numeric, {} categorical)",
            df.height(),
            df.width(),
            numeric,
            categorical
        );

        Ok(Self {
            df,
            columns,
            config,
        })
    }

    /// The analyzed table.
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// `(rows, columns)` of the table.
    pub fn shape(&self) -> (usize, usize) {
        self.df.shape()
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    /// Every column with its classification, in table order.
    pub fn columns(&self) -> &[ClassifiedColumn] {
        &self.columns
    }

    /// Classification of a column, `None` if the table has no such column.
    pub fn column_kind(&self, name: &str) -> Option<ColumnKind> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.kind)
    }

    /// Names of the numeric columns, in table order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns_of_kind(ColumnKind::Numeric)
    }

    /// Names of the categorical columns, in table order.
    pub fn categorical_columns(&self) -> Vec<&str> {
        self.columns_of_kind(ColumnKind::Categorical)
    }

    fn columns_of_kind(&self, kind: ColumnKind) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.name.as_str())
            .collect()
    }

    // ------------------------------------------------------------------
    // Analyses
    // ------------------------------------------------------------------

    /// Descriptive statistics (`count, mean, std, min, 25%, 50%, 75%, max`)
    /// for every numeric column.
    pub fn basic_stats(&self) -> Result<BasicStats> {
        let mut stats = BasicStats::new();
        for name in self.numeric_columns() {
            let values = self.present_numeric_values(name)?;
            stats.insert(name, statistics::describe(&values));
        }
        debug!("Computed basic statistics for {} columns", stats.len());
        Ok(stats)
    }

    /// Missing-value counts for every column that has at least one.
    pub fn missing_values(&self) -> MissingValues {
        missing::missing_counts(&self.df)
    }

    /// Missing-value percentages relative to the table's row count.
    pub fn missing_percentages(&self) -> OrderedMap<f64> {
        missing::as_percentages(&self.missing_values(), self.row_count())
    }

    /// Distinct count and most frequent values of every categorical column.
    pub fn categorical_summary(&self) -> Result<CategoricalSummaries> {
        let mut summary = CategoricalSummaries::new();
        for name in self.categorical_columns() {
            let series = self.text_series(name)?;
            let values = series.str().context(format!("Reading column '{name}'"))?;
            summary.insert(
                name,
                categorical::summarize(values.into_iter(), self.config.top_categories),
            );
        }
        debug!("Summarized {} categorical columns", summary.len());
        Ok(summary)
    }

    /// Pearson correlation matrix over the numeric columns.
    ///
    /// Empty when the table has no numeric column.
    pub fn correlations(&self) -> Result<CorrelationMatrix> {
        let mut columns = Vec::new();
        for name in self.numeric_columns() {
            columns.push((name.to_string(), self.numeric_values(name)?));
        }
        Ok(correlation::correlation_matrix(&columns))
    }

    /// IQR fences for every numeric column with at least one present value,
    /// including columns without outliers.
    pub fn outlier_bounds(&self) -> Result<OrderedMap<OutlierBounds>> {
        let mut bounds = OrderedMap::new();
        for name in self.numeric_columns() {
            let values = self.present_numeric_values(name)?;
            if let Some(b) = outliers::iqr_bounds(&values, self.config.iqr_multiplier) {
                bounds.insert(name, b);
            }
        }
        Ok(bounds)
    }

    /// Outlier counts of the numeric columns that have at least one outlier.
    pub fn outliers_iqr(&self) -> Result<OutlierCounts> {
        let counts: OutlierCounts = self
            .outlier_bounds()?
            .into_iter()
            .filter(|(_, b)| b.outlier_count > 0)
            .map(|(name, b)| (name, b.outlier_count))
            .collect();
        debug!("Found outliers in {} columns", counts.len());
        Ok(counts)
    }

    // ------------------------------------------------------------------
    // Column access
    // ------------------------------------------------------------------

    fn series(&self, name: &str) -> Result<&Series> {
        self.df
            .column(name)
            .map(|col| col.as_materialized_series())
            .map_err(|_| EdaError::ColumnNotFound(name.to_string()))
    }

    /// Values of a numeric column as `f64`, aligned with the table rows.
    pub(crate) fn numeric_values(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let casted = self
            .series(name)?
            .cast(&DataType::Float64)
            .context(format!("Casting column '{name}' to Float64"))?;
        let values = casted.f64().context(format!("Reading column '{name}'"))?;
        Ok(values.into_iter().collect())
    }

    /// Present values of a numeric column.
    pub(crate) fn present_numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self.numeric_values(name)?.into_iter().flatten().collect())
    }

    /// A categorical column cast to text.
    pub(crate) fn text_series(&self, name: &str) -> Result<Series> {
        self.series(name)?
            .cast(&DataType::String)
            .context(format!("Casting column '{name}' to String"))
    }
}

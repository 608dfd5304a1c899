use crate::engine::EdaEngine;
use crate::error::{EdaError, Result};
use crate::types::{
    BasicStats, CategoricalSummaries, CorrelationMatrix, MissingValues, OutlierCounts,
};
use chrono::Local;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

// ============================================================================
// JSON Report
// ============================================================================

/// Combined result of every analysis, ready for JSON output.
///
/// `NaN` statistics serialize as `null`; counts are plain integers.
#[derive(Debug, Clone, Serialize)]
pub struct EdaReport {
    /// Label of the analyzed dataset (usually the input path)
    pub dataset: String,
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// `[rows, columns]`
    pub shape: (usize, usize),
    /// Columns with at least one missing value
    pub missing_values: MissingValues,
    /// Descriptive statistics of numeric columns
    pub numerical_stats: BasicStats,
    /// Distinct and most frequent values of categorical columns
    pub categorical_summary: CategoricalSummaries,
    /// Numeric columns with at least one IQR outlier
    pub outliers_detected: OutlierCounts,
    /// Pearson correlation matrix of numeric columns
    pub correlations: CorrelationMatrix,
}

impl EdaReport {
    /// Total number of missing cells.
    pub fn total_missing(&self) -> usize {
        self.missing_values.values().sum()
    }

    /// Total number of outliers over all numeric columns.
    pub fn total_outliers(&self) -> usize {
        self.outliers_detected.values().sum()
    }
}

pub struct ReportGenerator;

impl ReportGenerator {
    /// Run every analysis of `engine` and collect the results.
    pub fn build_report(engine: &EdaEngine, dataset: impl Into<String>) -> Result<EdaReport> {
        Ok(EdaReport {
            dataset: dataset.into(),
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            shape: engine.shape(),
            missing_values: engine.missing_values(),
            numerical_stats: engine.basic_stats()?,
            categorical_summary: engine.categorical_summary()?,
            outliers_detected: engine.outliers_iqr()?,
            correlations: engine.correlations()?,
        })
    }

    /// Write the report as pretty-printed JSON, creating parent directories.
    pub fn write_json(report: &EdaReport, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(report)
            .map_err(|e| EdaError::ReportGenerationFailed(e.to_string()))?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;

        info!("Report saved: {}", path.display());

        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn engine() -> EdaEngine {
        let df = df![
            "A" => [1i64, 2, 3, 4, 5],
            "B" => ["x", "y", "x", "z", "x"],
            "C" => [Some(1.1), Some(2.2), None, Some(4.4), Some(5.5)],
            "D" => [10i64, 100, 10, 10, 10],
        ]
        .unwrap();
        EdaEngine::new(df).unwrap()
    }

    #[test]
    fn test_build_report_collects_every_analysis() {
        let report = ReportGenerator::build_report(&engine(), "sample.csv").unwrap();

        assert_eq!(report.dataset, "sample.csv");
        assert_eq!(report.shape, (5, 4));
        assert_eq!(report.missing_values["C"], 1);
        assert_eq!(report.numerical_stats["A"].mean, 3.0);
        assert_eq!(report.categorical_summary["B"].unique_count, 3);
        assert_eq!(report.outliers_detected["D"], 1);
        assert_eq!(report.correlations["A"]["A"], 1.0);
        assert_eq!(report.total_missing(), 1);
        assert_eq!(report.total_outliers(), 1);
    }

    #[test]
    fn test_report_json_layout() {
        let report = ReportGenerator::build_report(&engine(), "sample.csv").unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["shape"], serde_json::json!([5, 4]));
        assert_eq!(json["missing_values"]["C"], 1);
        assert_eq!(json["numerical_stats"]["A"]["50%"], 3.0);
        assert_eq!(json["categorical_summary"]["B"]["top_freq"]["x"], 3);
        assert_eq!(json["outliers_detected"]["D"], 1);
        assert!(json["missing_values"].get("A").is_none());
    }

    #[test]
    fn test_write_json_creates_directories() {
        let dir = std::env::temp_dir()
            .join(format!("auto-eda-report-{}", std::process::id()))
            .join("nested");
        let path = dir.join("eda_report.json");

        let report = ReportGenerator::build_report(&engine(), "sample.csv").unwrap();
        let written = ReportGenerator::write_json(&report, &path).unwrap();

        let content = fs::read_to_string(written).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["dataset"], "sample.csv");
    }
}

//! Configuration types for the EDA engine.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic engine setup.

use serde::{Deserialize, Serialize};

/// Configuration for the analysis engine and its report collaborators.
///
/// Use [`EngineConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use auto_eda::config::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .iqr_multiplier(3.0)
///     .top_categories(5)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Multiplier `k` for the IQR fences (`Q1 - k*IQR`, `Q3 + k*IQR`).
    /// Default: 1.5
    pub iqr_multiplier: f64,

    /// Number of most frequent values reported per categorical column.
    /// Default: 3
    pub top_categories: usize,

    /// Number of equal-width bins per histogram.
    /// Default: 24
    pub histogram_bins: usize,

    /// Maximum categories shown in a categorical count chart.
    /// Default: 20
    pub chart_category_limit: usize,

    /// Maximum numeric columns included in the pair plot.
    /// Default: 5
    pub pair_plot_max_columns: usize,

    /// Rows read by the CSV reader to infer column types.
    /// `None` scans the whole file.
    /// Default: Some(100)
    pub infer_schema_length: Option<usize>,

    /// Title of the HTML report.
    /// Default: "Automated EDA Report"
    pub report_title: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: 1.5,
            top_categories: 3,
            histogram_bins: 24,
            chart_category_limit: 20,
            pair_plot_max_columns: 5,
            infer_schema_length: Some(100),
            report_title: "Automated EDA Report".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier <= 0.0 {
            return Err(ConfigValidationError::InvalidIqrMultiplier(
                self.iqr_multiplier,
            ));
        }

        let counts = [
            ("top_categories", self.top_categories, 1),
            ("histogram_bins", self.histogram_bins, 1),
            ("chart_category_limit", self.chart_category_limit, 1),
            ("pair_plot_max_columns", self.pair_plot_max_columns, 2),
        ];
        for (field, value, minimum) in counts {
            if value < minimum {
                return Err(ConfigValidationError::CountTooSmall {
                    field: field.to_string(),
                    value,
                    minimum,
                });
            }
        }

        if self.infer_schema_length == Some(0) {
            return Err(ConfigValidationError::CountTooSmall {
                field: "infer_schema_length".to_string(),
                value: 0,
                minimum: 1,
            });
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid IQR multiplier: {0} (must be a finite number greater than 0)")]
    InvalidIqrMultiplier(f64),

    #[error("Invalid value for '{field}': {value} (must be at least {minimum})")]
    CountTooSmall {
        field: String,
        value: usize,
        minimum: usize,
    },
}

impl From<ConfigValidationError> for crate::error::EdaError {
    fn from(err: ConfigValidationError) -> Self {
        crate::error::EdaError::InvalidConfig(err.to_string())
    }
}

/// Builder for [`EngineConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    iqr_multiplier: Option<f64>,
    top_categories: Option<usize>,
    histogram_bins: Option<usize>,
    chart_category_limit: Option<usize>,
    pair_plot_max_columns: Option<usize>,
    infer_schema_length: Option<Option<usize>>,
    report_title: Option<String>,
}

impl EngineConfigBuilder {
    /// Set the IQR fence multiplier.
    pub fn iqr_multiplier(mut self, k: f64) -> Self {
        self.iqr_multiplier = Some(k);
        self
    }

    /// Set how many frequent values the categorical summary reports.
    pub fn top_categories(mut self, n: usize) -> Self {
        self.top_categories = Some(n);
        self
    }

    /// Set the number of histogram bins.
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Set the maximum number of categories per count chart.
    pub fn chart_category_limit(mut self, limit: usize) -> Self {
        self.chart_category_limit = Some(limit);
        self
    }

    /// Set the maximum number of pair plot columns.
    pub fn pair_plot_max_columns(mut self, max: usize) -> Self {
        self.pair_plot_max_columns = Some(max);
        self
    }

    /// Set the CSV schema inference length (`None` scans every row).
    pub fn infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = Some(rows);
        self
    }

    /// Set the HTML report title.
    pub fn report_title(mut self, title: impl Into<String>) -> Self {
        self.report_title = Some(title.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `EngineConfig` or an error if validation fails.
    pub fn build(self) -> Result<EngineConfig, ConfigValidationError> {
        let defaults = EngineConfig::default();
        let config = EngineConfig {
            iqr_multiplier: self.iqr_multiplier.unwrap_or(defaults.iqr_multiplier),
            top_categories: self.top_categories.unwrap_or(defaults.top_categories),
            histogram_bins: self.histogram_bins.unwrap_or(defaults.histogram_bins),
            chart_category_limit: self
                .chart_category_limit
                .unwrap_or(defaults.chart_category_limit),
            pair_plot_max_columns: self
                .pair_plot_max_columns
                .unwrap_or(defaults.pair_plot_max_columns),
            infer_schema_length: self
                .infer_schema_length
                .unwrap_or(defaults.infer_schema_length),
            report_title: self.report_title.unwrap_or(defaults.report_title),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.iqr_multiplier, 1.5);
        assert_eq!(config.top_categories, 3);
        assert_eq!(config.chart_category_limit, 20);
        assert_eq!(config.pair_plot_max_columns, 5);
        assert_eq!(config.infer_schema_length, Some(100));
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let config = EngineConfig::builder().build().unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_builder_custom_values() {
        let config = EngineConfig::builder()
            .iqr_multiplier(3.0)
            .top_categories(5)
            .histogram_bins(10)
            .infer_schema_length(None)
            .report_title("Sales EDA")
            .build()
            .unwrap();

        assert_eq!(config.iqr_multiplier, 3.0);
        assert_eq!(config.top_categories, 5);
        assert_eq!(config.histogram_bins, 10);
        assert_eq!(config.infer_schema_length, None);
        assert_eq!(config.report_title, "Sales EDA");
    }

    #[test]
    fn test_validation_invalid_multiplier() {
        for k in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = EngineConfig::builder().iqr_multiplier(k).build();
            assert!(matches!(
                result,
                Err(ConfigValidationError::InvalidIqrMultiplier(_))
            ));
        }
    }

    #[test]
    fn test_validation_zero_top_categories() {
        let result = EngineConfig::builder().top_categories(0).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::CountTooSmall { minimum: 1, .. }
        ));
    }

    #[test]
    fn test_validation_pair_plot_needs_two_columns() {
        let result = EngineConfig::builder().pair_plot_max_columns(1).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::CountTooSmall { minimum: 2, .. }
        ));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "iqr_multiplier": 2.0,
            "top_categories": 4,
            "histogram_bins": 12,
            "chart_category_limit": 10,
            "pair_plot_max_columns": 3,
            "infer_schema_length": null,
            "report_title": "Custom"
        }"#;

        let config: EngineConfig = serde_json::from_str(json).expect("valid config JSON");
        assert_eq!(config.iqr_multiplier, 2.0);
        assert_eq!(config.top_categories, 4);
        assert_eq!(config.infer_schema_length, None);
        assert!(config.validate().is_ok());
    }
}

//! Automated Exploratory Data Analysis Library
//!
//! A statistical analysis engine for tabular data built with Rust and Polars.
//!
//! # Overview
//!
//! Given a table (a CSV/Parquet file or an in-memory `DataFrame`), the engine
//! classifies every column and computes:
//!
//! - **Descriptive Statistics**: count, mean, sample std, min, quartiles, max
//! - **Missing Values**: per-column counts and percentages
//! - **Categorical Summary**: distinct count and most frequent values
//! - **Correlations**: pairwise Pearson matrix over numeric columns
//! - **Outliers**: IQR fence counts per numeric column
//!
//! On top of those, [`Visualizer`] builds chart data and the [`reporting`]
//! module writes JSON and HTML reports.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use auto_eda::{EdaEngine, EngineConfig, ReportGenerator};
//! use std::path::Path;
//!
//! let config = EngineConfig::builder().iqr_multiplier(3.0).build()?;
//! let engine = EdaEngine::with_config("data.csv", config)?;
//!
//! let stats = engine.basic_stats()?;
//! println!("mean of price: {}", stats["price"].mean);
//!
//! let report = ReportGenerator::build_report(&engine, "data.csv")?;
//! ReportGenerator::write_json(&report, Path::new("eda_report.json"))?;
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return [`EdaResult`]. A missing input file is
//! reported as [`EdaError::InputNotFound`]; unparseable input as
//! [`EdaError::MalformedInput`].

pub mod charts;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod reporting;
pub mod types;

// Re-exports for convenient access
pub use charts::{
    CategoryChart, CategoryCount, HeatmapMatrix, Histogram, HistogramBin, PairPlot, ScatterPanel,
    ScatterPoint, Visualizer,
};
pub use config::{ConfigValidationError, EngineConfig, EngineConfigBuilder};
pub use engine::{EdaEngine, classify_dtype, is_categorical_dtype, is_numeric_dtype};
pub use error::{EdaError, Result as EdaResult, ResultExt};
pub use loader::{TableSource, load_table};
pub use reporting::{EdaReport, HtmlReport, ReportGenerator};
pub use types::{
    BasicStats, CategoricalSummaries, CategoricalSummary, ClassifiedColumn, ColumnKind,
    ColumnStats, CorrelationMatrix, MissingValues, OrderedMap, OutlierBounds, OutlierCounts,
};

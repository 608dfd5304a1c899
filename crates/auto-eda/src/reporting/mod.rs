//! Report generation module.
//!
//! Two outputs are produced from one [`EdaEngine`](crate::EdaEngine):
//!
//! - [`EdaReport`]: every analysis result, written as JSON by
//!   [`ReportGenerator::write_json`]
//! - [`HtmlReport`]: a standalone HTML page with summary tables and inline
//!   SVG charts
//!
//! # Example
//!
//! ```rust,ignore
//! use auto_eda::{EdaEngine, ReportGenerator, HtmlReport};
//!
//! let engine = EdaEngine::new("data/train.csv")?;
//! let report = ReportGenerator::build_report(&engine, "data/train.csv")?;
//! ReportGenerator::write_json(&report, Path::new("eda_report.json"))?;
//! HtmlReport::save(&engine, Path::new("eda_report.html"))?;
//! ```

mod generator;
mod html;
pub mod svg;

pub use generator::{EdaReport, ReportGenerator};
pub use html::HtmlReport;

/// Escape HTML special characters.
pub(crate) fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

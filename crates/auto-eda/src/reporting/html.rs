use super::{escape, svg};
use crate::charts::Visualizer;
use crate::engine::EdaEngine;
use crate::error::Result;
use crate::types::ColumnStats;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 2rem auto; max-width: 1100px; color: #222; }
h1 { border-bottom: 2px solid #4c72b0; padding-bottom: .3rem; }
h2 { margin-top: 2rem; color: #333; }
table { border-collapse: collapse; margin: .5rem 0 1rem; }
th, td { border: 1px solid #ddd; padding: .35rem .7rem; text-align: right; }
th:first-child, td:first-child { text-align: left; }
thead th { background: #f3f5f9; }
.meta { color: #666; font-size: .9rem; }
.chart { margin: 1rem 0; }
"#;

/// Standalone HTML summary of an analyzed table.
pub struct HtmlReport;

impl HtmlReport {
    /// Render the full HTML document.
    pub fn render(engine: &EdaEngine) -> Result<String> {
        let title = escape(&engine.config().report_title);
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{title}</title>\n<style>{STYLE}</style>\n"));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("<h1>{title}</h1>\n"));
        html.push_str(&format!(
            "<p class=\"meta\">Generated: {}</p>\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));

        html.push_str(&Self::overview_section(engine));
        html.push_str(&Self::statistics_section(engine)?);
        html.push_str(&Self::missing_section(engine));
        html.push_str(&Self::outlier_section(engine)?);
        html.push_str(&Self::visualization_section(engine)?);

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }

    /// Render and write the document, creating parent directories.
    pub fn save(engine: &EdaEngine, path: &Path) -> Result<PathBuf> {
        let html = Self::render(engine)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, html)?;

        info!("HTML report saved: {}", path.display());
        Ok(path.to_path_buf())
    }

    fn overview_section(engine: &EdaEngine) -> String {
        let (rows, columns) = engine.shape();
        let memory_kb = engine.dataframe().estimated_size() as f64 / 1024.0;
        format!(
            "<h2>Dataset Overview</h2>\n<ul>\n<li>Rows: {rows}</li>\n<li>Columns: {columns}</li>\n<li>Memory Usage: {memory_kb:.2} KB</li>\n</ul>\n"
        )
    }

    fn statistics_section(engine: &EdaEngine) -> Result<String> {
        let stats = engine.basic_stats()?;
        if stats.is_empty() {
            return Ok(String::new());
        }

        let mut html = String::from("<h2>Descriptive Statistics</h2>\n<table>\n<thead><tr><th></th>");
        for name in stats.keys() {
            html.push_str(&format!("<th>{}</th>", escape(name)));
        }
        html.push_str("</tr></thead>\n<tbody>\n");

        for statistic in ColumnStats::NAMES {
            html.push_str(&format!("<tr><th>{statistic}</th>"));
            for column in stats.values() {
                html.push_str(&format!("<td>{}</td>", format_number(column.get(statistic))));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n");
        Ok(html)
    }

    fn missing_section(engine: &EdaEngine) -> String {
        let counts = engine.missing_values();
        if counts.is_empty() {
            return String::new();
        }
        let percentages = engine.missing_percentages();

        let mut html = String::from(
            "<h2>Missing Values</h2>\n<table>\n<thead><tr><th>Column</th><th>Missing</th><th>Percentage</th></tr></thead>\n<tbody>\n",
        );
        for (name, count) in counts.iter() {
            let pct = percentages.get(name).copied().unwrap_or(0.0);
            html.push_str(&format!(
                "<tr><td>{}</td><td>{count}</td><td>{pct:.1}%</td></tr>\n",
                escape(name)
            ));
        }
        html.push_str("</tbody>\n</table>\n");
        html
    }

    fn outlier_section(engine: &EdaEngine) -> Result<String> {
        let bounds = engine.outlier_bounds()?;
        let flagged: Vec<_> = bounds.iter().filter(|(_, b)| b.outlier_count > 0).collect();
        if flagged.is_empty() {
            return Ok(String::new());
        }

        let mut html = String::from(
            "<h2>Outliers (IQR)</h2>\n<table>\n<thead><tr><th>Column</th><th>Outliers</th><th>Lower Bound</th><th>Upper Bound</th></tr></thead>\n<tbody>\n",
        );
        for (name, b) in flagged {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td></tr>\n",
                escape(name),
                b.outlier_count,
                b.lower_bound,
                b.upper_bound
            ));
        }
        html.push_str("</tbody>\n</table>\n");
        Ok(html)
    }

    fn visualization_section(engine: &EdaEngine) -> Result<String> {
        let visualizer = Visualizer::new(engine);
        let mut charts = Vec::new();

        if let Some(heatmap) = visualizer.correlation_heatmap()? {
            charts.push(("Correlation Heatmap".to_string(), svg::heatmap_svg(&heatmap)));
        }
        for histogram in visualizer.histograms(None)? {
            if histogram.bins.is_empty() {
                continue;
            }
            charts.push((
                format!("Distribution of {}", escape(&histogram.column)),
                svg::histogram_svg(&histogram),
            ));
        }
        for chart in visualizer.category_counts(None)? {
            if chart.counts.is_empty() {
                continue;
            }
            charts.push((
                format!("Count of {}", escape(&chart.column)),
                svg::category_bars_svg(&chart),
            ));
        }

        if charts.is_empty() {
            return Ok(String::new());
        }

        let mut html = String::from("<h2>Visualizations</h2>\n");
        for (heading, chart) in charts {
            html.push_str(&format!("<div class=\"chart\">\n<h3>{heading}</h3>\n{chart}\n</div>\n"));
        }
        Ok(html)
    }
}

/// Two decimals, `NaN` as a dash.
fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_nan() => "-".to_string(),
        Some(v) => format!("{v:.2}"),
        None => String::new(),
    }
}

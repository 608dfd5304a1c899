//! CLI entry point for the automated EDA engine.

use anyhow::Result;
use auto_eda::{EdaEngine, EdaError, EdaReport, EngineConfig, HtmlReport, ReportGenerator};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Automated Exploratory Data Analysis",
    long_about = "Computes descriptive statistics, missing values, categorical summaries,\n\
                  correlations and IQR outliers for a CSV or Parquet file.\n\n\
                  EXAMPLES:\n  \
                  # Basic usage\n  \
                  auto-eda --file data.csv\n\n  \
                  # Custom output and an HTML report\n  \
                  auto-eda --file data.csv --output out/report.json --html out/report.html\n\n  \
                  # Pipe the report to another tool\n  \
                  auto-eda --file data.csv --json | jq .outliers_detected"
)]
struct Args {
    /// Path to the input CSV (or Parquet) file
    #[arg(short, long)]
    file: PathBuf,

    /// Path of the JSON report
    #[arg(short, long, default_value = "eda_report.json")]
    output: PathBuf,

    /// Also write an HTML report with charts to this path
    #[arg(long)]
    html: Option<PathBuf>,

    /// Multiplier k for the IQR outlier fences
    #[arg(long, default_value = "1.5")]
    iqr_multiplier: f64,

    /// Number of most frequent values reported per categorical column
    #[arg(long, default_value = "3")]
    top_categories: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and final result)
    #[arg(short, long)]
    quiet: bool,

    /// Print the JSON report to stdout instead of the human-readable summary
    ///
    /// Disables all logging so stdout only contains the report.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err:#}");
            match err.downcast_ref::<EdaError>() {
                Some(eda) if eda.is_input_not_found() => {
                    eprintln!("Error: {}.", eda.root());
                }
                _ => eprintln!("Error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = EngineConfig::builder()
        .iqr_multiplier(args.iqr_multiplier)
        .top_categories(args.top_categories)
        .build()
        .map_err(EdaError::from)?;
    debug!("Engine configuration: {:?}", config);

    if !args.json {
        println!("Analyzing {}...", args.file.display());
    }

    let engine = EdaEngine::with_config(args.file.as_path(), config)?;
    let report = ReportGenerator::build_report(&engine, args.file.display().to_string())?;
    ReportGenerator::write_json(&report, &args.output)?;

    if let Some(html_path) = &args.html {
        HtmlReport::save(&engine, html_path)?;
        info!("HTML report written to {}", html_path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, &args.output, args.html.as_deref());
    }

    Ok(())
}

/// Quick console summary of the report.
///
/// Uses `println!` rather than logging so it stays visible at any log level.
fn print_summary(report: &EdaReport, output: &Path, html: Option<&Path>) {
    println!("EDA Report saved to {}", output.display());
    if let Some(path) = html {
        println!("HTML Report saved to {}", path.display());
    }

    let (rows, columns) = report.shape;
    println!("\nQuick Summary:");
    println!("Rows: {rows}, Columns: {columns}");
    println!("Missing Values: {}", report.total_missing());
    println!("Outliers Detected: {}", report.total_outliers());
}

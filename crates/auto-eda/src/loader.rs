//! Table loading.
//!
//! The engine accepts either a path to a delimited text (or Parquet) file
//! or an already materialized [`DataFrame`]; [`TableSource`] covers both.

use crate::config::EngineConfig;
use crate::error::{EdaError, Result};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the engine's table comes from.
#[derive(Debug, Clone)]
pub enum TableSource {
    /// A file on disk, parsed by [`load_table`].
    Path(PathBuf),
    /// An in-memory table.
    Frame(DataFrame),
}

impl From<DataFrame> for TableSource {
    fn from(df: DataFrame) -> Self {
        TableSource::Frame(df)
    }
}

impl From<PathBuf> for TableSource {
    fn from(path: PathBuf) -> Self {
        TableSource::Path(path)
    }
}

impl From<&Path> for TableSource {
    fn from(path: &Path) -> Self {
        TableSource::Path(path.to_path_buf())
    }
}

impl From<&str> for TableSource {
    fn from(path: &str) -> Self {
        TableSource::Path(PathBuf::from(path))
    }
}

impl From<String> for TableSource {
    fn from(path: String) -> Self {
        TableSource::Path(PathBuf::from(path))
    }
}

/// Load a table from disk.
///
/// `.parquet` files go through the Parquet reader; anything else is read as
/// CSV with a header row. Missing files yield [`EdaError::InputNotFound`],
/// unparseable ones [`EdaError::MalformedInput`].
pub fn load_table(path: &Path, config: &EngineConfig) -> Result<DataFrame> {
    if !path.exists() {
        return Err(EdaError::InputNotFound(path.to_path_buf()));
    }

    info!("Loading dataset from: {}", path.display());

    let is_parquet = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));

    let df = if is_parquet {
        load_parquet(path)
    } else {
        load_csv_with_fallbacks(path, config.infer_schema_length)
    }
    .map_err(|reason| EdaError::MalformedInput {
        path: path.to_path_buf(),
        reason,
    })?;

    info!("Dataset loaded successfully: {:?}", df.shape());
    Ok(df)
}

fn load_parquet(path: &Path) -> std::result::Result<DataFrame, String> {
    let file = std::fs::File::open(path).map_err(|e| e.to_string())?;
    ParquetReader::new(file).finish().map_err(|e| e.to_string())
}

/// Cell contents read as missing, in addition to empty fields.
const NULL_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn null_values() -> Option<NullValues> {
    Some(NullValues::AllColumns(
        NULL_TOKENS.iter().map(|token| PlSmallStr::from(*token)).collect(),
    ))
}

fn parse_options(quote_char: Option<u8>) -> CsvParseOptions {
    CsvParseOptions::default()
        .with_quote_char(quote_char)
        .with_null_values(null_values())
}

/// Load CSV with multiple fallback strategies.
///
/// The whole chain runs with the configured schema inference length first.
/// If every strategy fails, it runs once more inferring types from every row.
fn load_csv_with_fallbacks(
    path: &Path,
    infer_schema_length: Option<usize>,
) -> std::result::Result<DataFrame, String> {
    match try_csv_strategies(path, infer_schema_length) {
        Ok(df) => Ok(df),
        Err(e) if infer_schema_length.is_some() => {
            debug!("Loading with partial schema inference failed: {}", e);
            try_csv_strategies(path, None)
        }
        Err(e) => Err(e),
    }
}

fn try_csv_strategies(
    path: &Path,
    infer_schema_length: Option<usize>,
) -> std::result::Result<DataFrame, String> {
    // Strategy 1: Standard loading with quote handling
    let quoted = CsvReadOptions::default()
        .with_infer_schema_length(infer_schema_length)
        .with_has_header(true)
        .with_parse_options(parse_options(Some(b'"')))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish());
    match quoted {
        Ok(df) => return Ok(df),
        Err(e) => debug!("Standard loading failed: {}", e),
    }

    // Strategy 2: Without quote handling
    let unquoted = CsvReadOptions::default()
        .with_infer_schema_length(infer_schema_length)
        .with_has_header(true)
        .with_parse_options(parse_options(None))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish());
    match unquoted {
        Ok(df) => return Ok(df),
        Err(e) => debug!("Loading without quotes failed: {}", e),
    }

    // Strategy 3: Pre-clean content
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let cursor = Cursor::new(clean_csv_content(&content));

    CsvReadOptions::default()
        .with_infer_schema_length(infer_schema_length)
        .with_has_header(true)
        .with_parse_options(parse_options(Some(b'"')))
        .into_reader_with_file_handle(cursor)
        .finish()
        .map_err(|e| e.to_string())
}

/// Collapse doubled quotes and drop blank lines.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("auto-eda-loader-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_input_not_found() {
        let result = load_table(Path::new("/definitely/not/here.csv"), &EngineConfig::default());
        assert!(matches!(result, Err(EdaError::InputNotFound(_))));
    }

    #[test]
    fn test_load_csv_with_missing_cells() {
        let path = temp_file("basic.csv", "A,B,C\n1,x,1.1\n2,y,\n3,x,3.3\n");
        let df = load_table(&path, &EngineConfig::default()).unwrap();

        assert_eq!(df.shape(), (3, 3));
        assert_eq!(df.column("A").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("B").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("C").unwrap().null_count(), 1);
    }

    #[test]
    fn test_na_token_keeps_numeric_column() {
        let path = temp_file("na_token.csv", "A,B\n1,x\nNA,y\n3,x\n4,z\n");
        let df = load_table(&path, &EngineConfig::default()).unwrap();

        assert_eq!(df.column("A").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("A").unwrap().null_count(), 1);
        assert_eq!(df.column("B").unwrap().null_count(), 0);
    }

    #[test]
    fn test_nan_and_null_tokens_are_missing() {
        let path = temp_file(
            "nan_token.csv",
            "D,E\n10,a\n100,null\n10,N/A\n10,b\n10,a\nNaN,b\n",
        );
        let df = load_table(&path, &EngineConfig::default()).unwrap();

        assert_eq!(df.column("D").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("D").unwrap().null_count(), 1);
        assert_eq!(df.column("E").unwrap().null_count(), 2);
    }

    #[test]
    fn test_late_float_retries_with_full_inference() {
        let mut content = String::from("A,B\n");
        for i in 0..150 {
            content.push_str(&format!("{i},x\n"));
        }
        content.push_str("2.5,y\n");
        let path = temp_file("late_float.csv", &content);

        let df = load_table(&path, &EngineConfig::default()).unwrap();
        assert_eq!(df.shape(), (151, 2));
        assert_eq!(df.column("A").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_unparseable_parquet_is_malformed() {
        let path = temp_file("broken.parquet", "this is not parquet");
        let result = load_table(&path, &EngineConfig::default());
        assert!(matches!(result, Err(EdaError::MalformedInput { .. })));
    }

    #[test]
    fn test_clean_csv_content() {
        let cleaned = clean_csv_content("a,b\n\n\"\"x\"\",1\n   \n");
        assert_eq!(cleaned, "a,b\n\"x\",1");
    }

    #[test]
    fn test_table_source_conversions() {
        assert!(matches!(TableSource::from("data.csv"), TableSource::Path(_)));
        assert!(matches!(
            TableSource::from(PathBuf::from("data.csv")),
            TableSource::Path(_)
        ));
        assert!(matches!(
            TableSource::from(DataFrame::empty()),
            TableSource::Frame(_)
        ));
    }
}

use serde::Serialize;

/// Histogram bin for numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Distribution of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub column: String,
    pub bins: Vec<HistogramBin>,
}

/// Square matrix with shared row/column labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Simple category count entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
    /// Share of the column's present values.
    pub percentage: f64,
}

/// Most frequent categories of one categorical column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChart {
    pub column: String,
    pub counts: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// One off-diagonal cell of a pair plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPanel {
    pub x: String,
    pub y: String,
    pub points: Vec<ScatterPoint>,
}

/// Pairwise scatter plots of a few numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairPlot {
    pub columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<String>,
    pub panels: Vec<ScatterPanel>,
}

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::ops::Index;

// ============================================================================
// Ordered results
// ============================================================================

/// A string-keyed map that keeps insertion order.
///
/// Analyses return column-keyed results in table column order, and the
/// categorical `top_freq` keeps its descending-count order. Serializes as a
/// plain JSON object with keys in that order. Lookups go through a key
/// index into `entries`.
#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing (in place) any existing value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = OrderedMap {
            entries: Vec::with_capacity(iter.size_hint().0),
            index: HashMap::with_capacity(iter.size_hint().0),
        };
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V> Index<&str> for OrderedMap<V> {
    type Output = V;

    fn index(&self, key: &str) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key '{}' not present in OrderedMap", key),
        }
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ============================================================================
// Column classification
// ============================================================================

/// Semantic type of a column, decided once when the engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Integer or floating point values.
    Numeric,
    /// Text or enumerated values.
    Categorical,
    /// Anything else (boolean, temporal, nested...). Ignored by the
    /// numeric and categorical analyses.
    Unclassified,
}

impl ColumnKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
            Self::Unclassified => "unclassified",
        }
    }
}

/// A column name paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedColumn {
    pub name: String,
    pub dtype: String,
    pub kind: ColumnKind,
}

// ============================================================================
// Analysis results
// ============================================================================

/// Descriptive statistics of one numeric column.
///
/// Serialized keys follow the conventional `describe` layout:
/// `count, mean, std, min, 25%, 50%, 75%, max`. Undefined statistics are
/// `NaN` (serialized as `null`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub p25: f64,
    #[serde(rename = "50%")]
    pub p50: f64,
    #[serde(rename = "75%")]
    pub p75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Statistics of a column without any present value.
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            p50: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        }
    }

    /// Look a statistic up by its serialized name.
    pub fn get(&self, statistic: &str) -> Option<f64> {
        match statistic {
            "count" => Some(self.count as f64),
            "mean" => Some(self.mean),
            "std" => Some(self.std),
            "min" => Some(self.min),
            "25%" => Some(self.p25),
            "50%" => Some(self.p50),
            "75%" => Some(self.p75),
            "max" => Some(self.max),
            _ => None,
        }
    }

    /// Statistic names in serialization order.
    pub const NAMES: [&'static str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
}

/// Summary of one categorical column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalSummary {
    /// Number of distinct present values.
    pub unique_count: usize,
    /// Most frequent values, by descending count then first occurrence.
    pub top_freq: OrderedMap<usize>,
}

/// IQR fences computed for one numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub outlier_count: usize,
}

/// Column name -> descriptive statistics.
pub type BasicStats = OrderedMap<ColumnStats>;
/// Column name -> positive missing count.
pub type MissingValues = OrderedMap<usize>;
/// Column name -> categorical summary.
pub type CategoricalSummaries = OrderedMap<CategoricalSummary>;
/// Column name -> column name -> Pearson coefficient.
pub type CorrelationMatrix = OrderedMap<OrderedMap<f64>>;
/// Column name -> positive outlier count.
pub type OutlierCounts = OrderedMap<usize>;

// ============================================================================
// Tests
// ============================================================================

//! Column classification by polars dtype.

use crate::types::{ClassifiedColumn, ColumnKind};
use polars::prelude::*;

/// Check if a DataType is numeric (integer, float or fixed-point decimal).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::Int128
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
            | DataType::Decimal(..)
    )
}

/// Check if a DataType holds text or a bounded set of labels.
#[inline]
pub fn is_categorical_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::String | DataType::Categorical(..) | DataType::Enum(..)
    )
}

/// Map a dtype to its column kind.
pub fn classify_dtype(dtype: &DataType) -> ColumnKind {
    if is_numeric_dtype(dtype) {
        ColumnKind::Numeric
    } else if is_categorical_dtype(dtype) {
        ColumnKind::Categorical
    } else {
        ColumnKind::Unclassified
    }
}

/// Classify every column of a frame, in column order.
pub fn classify_columns(df: &DataFrame) -> Vec<ClassifiedColumn> {
    df.get_columns()
        .iter()
        .map(|col| ClassifiedColumn {
            name: col.name().to_string(),
            dtype: format!("{:?}", col.dtype()),
            kind: classify_dtype(col.dtype()),
        })
        .collect()
}

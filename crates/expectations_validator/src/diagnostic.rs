//! Structured diagnostics produced by failing checks.
//!
//! Checks never print. They return `Diagnostic` records and leave rendering
//! to whoever consumes the outcome.

use expectations_core::{DType, DataValue};
use serde::Serialize;
use std::fmt;

/// A single reason an expectation was not met.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A required column is absent
    MissingColumn {
        /// Required column
        column: String,
        /// Columns the dataset does have
        available: Vec<String>,
    },

    /// The dataset has a different number of columns than expected
    ColumnCountMismatch {
        /// Number of columns in the dataset
        actual: usize,
        /// Number of expected columns
        expected: usize,
    },

    /// Expected columns that the dataset lacks
    MissingColumns {
        /// Absent column names, sorted
        columns: Vec<String>,
    },

    /// Dataset columns that were not expected
    UnexpectedColumns {
        /// Extra column names, sorted
        columns: Vec<String>,
    },

    /// A column's dtype differs from the expected one
    DTypeMismatch {
        /// Column name
        column: String,
        /// Dtype the column has
        actual: DType,
        /// Dtype the schema asks for
        expected: DType,
    },

    /// A column contains nulls
    NullValues {
        /// Column name
        column: String,
        /// Number of null values
        count: usize,
        /// Row of the first null
        first_row: usize,
    },

    /// A distinct column value is not in the permitted set
    ValueNotPermitted {
        /// Column name
        column: String,
        /// Offending value
        value: DataValue,
    },

    /// A distinct column value is in the forbidden set
    ValueForbidden {
        /// Column name
        column: String,
        /// Offending value
        value: DataValue,
    },

    /// The column mean is outside the bounds
    MeanOutOfRange {
        /// Column name
        column: String,
        /// Computed mean
        mean: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// The column has no numeric values, so it has no mean
    MeanUndefined {
        /// Column name
        column: String,
    },
}

impl Diagnostic {
    /// Returns the column this diagnostic is about, if it concerns one.
    pub fn column(&self) -> Option<&str> {
        match self {
            Diagnostic::MissingColumn { column, .. }
            | Diagnostic::DTypeMismatch { column, .. }
            | Diagnostic::NullValues { column, .. }
            | Diagnostic::ValueNotPermitted { column, .. }
            | Diagnostic::ValueForbidden { column, .. }
            | Diagnostic::MeanOutOfRange { column, .. }
            | Diagnostic::MeanUndefined { column } => Some(column),
            Diagnostic::ColumnCountMismatch { .. }
            | Diagnostic::MissingColumns { .. }
            | Diagnostic::UnexpectedColumns { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingColumn { column, available } => write!(
                f,
                "Column '{}' is required but not included in [{}]",
                column,
                available.join(", ")
            ),
            Diagnostic::ColumnCountMismatch { actual, expected } => write!(
                f,
                "The dataset has {} column(s) but should have {}",
                actual, expected
            ),
            Diagnostic::MissingColumns { columns } => write!(
                f,
                "The dataset is missing column(s): [{}]",
                columns.join(", ")
            ),
            Diagnostic::UnexpectedColumns { columns } => write!(
                f,
                "The dataset has unexpected column(s): [{}]",
                columns.join(", ")
            ),
            Diagnostic::DTypeMismatch {
                column,
                actual,
                expected,
            } => write!(
                f,
                "Column '{}' is of type {} but should be {}",
                column, actual, expected
            ),
            Diagnostic::NullValues {
                column,
                count,
                first_row,
            } => write!(
                f,
                "Column '{}' has {} null value(s), first at row {}",
                column, count, first_row
            ),
            Diagnostic::ValueNotPermitted { column, value } => write!(
                f,
                "Value '{}' in column '{}' is not in the permitted set",
                value, column
            ),
            Diagnostic::ValueForbidden { column, value } => write!(
                f,
                "Value '{}' in column '{}' is in the forbidden set",
                value, column
            ),
            Diagnostic::MeanOutOfRange {
                column,
                mean,
                min,
                max,
            } => write!(
                f,
                "Mean of column '{}' is {} but should be within [{}, {}]",
                column, mean, min, max
            ),
            Diagnostic::MeanUndefined { column } => write!(
                f,
                "Column '{}' has no numeric values, its mean is undefined",
                column
            ),
        }
    }
}

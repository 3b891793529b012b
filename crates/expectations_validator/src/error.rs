//! Error types for expectation checks.
//!
//! An expectation that is not met is a `CheckOutcome` with `passed == false`,
//! not an error. These errors are for input a check cannot evaluate at all.

use expectations_core::CoreError;
use thiserror::Error;

/// Result type for expectation checks.
pub type Result<T> = std::result::Result<T, ExpectationError>;

/// Structural errors that prevent a check from producing an outcome.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExpectationError {
    /// Referenced column is not in the dataset
    #[error("Column '{column}' not found; available columns: [{}]", .available.join(", "))]
    ColumnNotFound {
        /// Requested column
        column: String,
        /// Columns the dataset does have
        available: Vec<String>,
    },

    /// A numeric aggregate met a value that is not a number
    #[error("Column '{column}' holds a non-numeric value of type {found} at row {row}")]
    NonNumericValue {
        /// Column name
        column: String,
        /// Row of the first offending value
        row: usize,
        /// Type of the offending value
        found: String,
    },

    /// The dataset could not turn a column's storage into values
    #[error(transparent)]
    Storage(#[from] CoreError),
}

impl ExpectationError {
    /// Creates a new column-not-found error.
    pub fn column_not_found<S: AsRef<str>>(
        column: impl Into<String>,
        available: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
            available: available
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
        }
    }

    /// Creates a new non-numeric value error.
    pub fn non_numeric(column: impl Into<String>, row: usize, found: impl Into<String>) -> Self {
        Self::NonNumericValue {
            column: column.into(),
            row,
            found: found.into(),
        }
    }
}

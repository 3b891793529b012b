//! Error types for the core data model.
//!
//! These errors cover dataset construction and mutation. Failing an
//! expectation is never an error; see the validator crate for that.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while building or modifying a dataset.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// Two columns share a name
    #[error("Duplicate column name: '{0}'")]
    DuplicateColumn(String),

    /// A column's length differs from the dataset height
    #[error("Column '{column}' has {actual} values but the dataset has {expected} rows")]
    LengthMismatch {
        /// Column name
        column: String,
        /// Dataset height
        expected: usize,
        /// Column length
        actual: usize,
    },

    /// A row has a different number of cells than there are column names
    #[error("Row {row} has {actual} values but {expected} column names were given")]
    RowWidthMismatch {
        /// Row index
        row: usize,
        /// Number of column names
        expected: usize,
        /// Number of cells in the row
        actual: usize,
    },

    /// A value does not conform to the column's declared dtype
    #[error("Value at row {row} of column '{column}' is {actual} but the column is {expected}")]
    ValueTypeMismatch {
        /// Column name
        column: String,
        /// Row index
        row: usize,
        /// Declared dtype
        expected: String,
        /// Type of the offending value
        actual: String,
    },

    /// Referenced column does not exist
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// Row index past the end of the dataset
    #[error("Row {row} is out of bounds for a dataset with {height} rows")]
    RowOutOfBounds {
        /// Requested row
        row: usize,
        /// Dataset height
        height: usize,
    },

    /// Type name that no dtype is known by
    #[error("Unknown dtype: '{0}'")]
    UnknownDType(String),

    /// A column's storage type cannot be read as values
    #[error("Column '{column}' has unsupported storage type {data_type}")]
    UnsupportedColumnType {
        /// Column name
        column: String,
        /// Storage type as reported by the backing store
        data_type: String,
    },
}

impl CoreError {
    /// Creates a new length mismatch error.
    pub fn length_mismatch(column: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            column: column.into(),
            expected,
            actual,
        }
    }

    /// Creates a new value type mismatch error.
    pub fn value_type_mismatch(
        column: impl Into<String>,
        row: usize,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ValueTypeMismatch {
            column: column.into(),
            row,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a new column-not-found error.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound(column.into())
    }

    /// Creates a new unsupported column type error.
    pub fn unsupported_column_type(
        column: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self::UnsupportedColumnType {
            column: column.into(),
            data_type: data_type.into(),
        }
    }
}

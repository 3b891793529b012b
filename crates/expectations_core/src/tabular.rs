//! The capability interface expectations are evaluated against.
//!
//! Anything that can list its columns, report a column's dtype, hand out a
//! column's values and count its rows can be validated. Validation never
//! needs more than this.

use crate::{DType, DataFrame, DataValue, Result};
use std::borrow::Cow;

/// Read access to a tabular dataset.
///
/// Implementations must be side-effect free: the expectation layer calls
/// these methods any number of times and relies on them returning the same
/// answer for an unchanged dataset.
pub trait TabularData {
    /// Returns the column names in dataset order.
    fn column_names(&self) -> Vec<&str>;

    /// Returns the dtype of a column, or `None` if it does not exist.
    fn column_dtype(&self, name: &str) -> Option<DType>;

    /// Returns the values of a column, or `None` if it does not exist.
    ///
    /// Columnar stores that keep values in another representation may
    /// return owned, converted values. A column whose storage cannot be
    /// converted yields `Some(Err(_))`; it must never be read as nulls.
    fn column_values(&self, name: &str) -> Option<Result<Cow<'_, [DataValue]>>>;

    /// Returns the number of rows.
    fn row_count(&self) -> usize;

    /// Returns true if a column with this name exists.
    fn has_column(&self, name: &str) -> bool {
        self.column_names().contains(&name)
    }
}

impl TabularData for DataFrame {
    fn column_names(&self) -> Vec<&str> {
        DataFrame::column_names(self)
    }

    fn column_dtype(&self, name: &str) -> Option<DType> {
        self.column(name).map(|c| c.dtype())
    }

    fn column_values(&self, name: &str) -> Option<Result<Cow<'_, [DataValue]>>> {
        self.column(name).map(|c| Ok(Cow::Borrowed(c.values())))
    }

    fn row_count(&self) -> usize {
        self.height()
    }

    fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}

impl<T: TabularData + ?Sized> TabularData for &T {
    fn column_names(&self) -> Vec<&str> {
        (**self).column_names()
    }

    fn column_dtype(&self, name: &str) -> Option<DType> {
        (**self).column_dtype(name)
    }

    fn column_values(&self, name: &str) -> Option<Result<Cow<'_, [DataValue]>>> {
        (**self).column_values(name)
    }

    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn has_column(&self, name: &str) -> bool {
        (**self).has_column(name)
    }
}

impl<T: TabularData + ?Sized> TabularData for Box<T> {
    fn column_names(&self) -> Vec<&str> {
        (**self).column_names()
    }

    fn column_dtype(&self, name: &str) -> Option<DType> {
        (**self).column_dtype(name)
    }

    fn column_values(&self, name: &str) -> Option<Result<Cow<'_, [DataValue]>>> {
        (**self).column_values(name)
    }

    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn has_column(&self, name: &str) -> bool {
        (**self).has_column(name)
    }
}

//! The expectation-capable view over a dataset.
//!
//! The checks themselves live in `structure`, `content` and `statistics`;
//! this module holds the wrapper and the column lookups they share.

use crate::{ExpectationError, Result};
use expectations_core::{DType, DataValue, TabularData};
use std::borrow::Cow;
use std::ops::Deref;

/// A set of expectations bound to one dataset.
///
/// The set only borrows the dataset and never mutates it, so any number of
/// sets (and any number of checks) can run against the same snapshot. It
/// dereferences to the dataset, keeping the dataset's own API at hand.
///
/// # Example
///
/// ```rust
/// use expectations_core::{Column, DataFrame};
/// use expectations_validator::ExpectationSet;
///
/// let frame = DataFrame::new(vec![
///     Column::from_values("A", [1i64, 2, 3]),
///     Column::from_values("B", [4i64, 5, 6]),
/// ])
/// .unwrap();
///
/// let expect = ExpectationSet::from_existing(&frame);
/// assert!(expect.has_columns(&["A", "B"]).passed());
/// assert!(expect.columns_equal(&["B", "A"]).passed());
/// assert!(expect.mean_between("A", 1.0, 3.0).unwrap().passed());
///
/// // Native dataset operations stay available through the set.
/// assert_eq!(expect.height(), 3);
/// ```
#[derive(Debug)]
pub struct ExpectationSet<'a, D: ?Sized> {
    data: &'a D,
}

impl<'a, D: TabularData + ?Sized> ExpectationSet<'a, D> {
    /// Wraps an existing dataset. No data is copied.
    pub fn from_existing(data: &'a D) -> Self {
        Self { data }
    }

    /// Returns the wrapped dataset.
    pub fn dataset(&self) -> &'a D {
        self.data
    }

    /// Returns the dataset's column names as owned strings.
    pub(crate) fn available_columns(&self) -> Vec<String> {
        self.data
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn not_found(&self, column: &str) -> ExpectationError {
        ExpectationError::column_not_found(column, self.data.column_names())
    }

    /// Looks up a column's values, failing if the column does not exist or
    /// its storage cannot be read as values.
    pub(crate) fn values_of(&self, column: &str) -> Result<Cow<'a, [DataValue]>> {
        match self.data.column_values(column) {
            Some(values) => Ok(values?),
            None => Err(self.not_found(column)),
        }
    }

    /// Looks up a column's dtype, failing if the column does not exist.
    pub(crate) fn dtype_of(&self, column: &str) -> Result<DType> {
        self.data
            .column_dtype(column)
            .ok_or_else(|| self.not_found(column))
    }
}

impl<D: ?Sized> Clone for ExpectationSet<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for ExpectationSet<'_, D> {}

impl<D: ?Sized> Deref for ExpectationSet<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.data
    }
}

/// Extension trait giving every dataset an `expectations()` entry point.
///
/// ```rust
/// use expectations_core::{Column, DataFrame};
/// use expectations_validator::Expect;
///
/// let frame = DataFrame::new(vec![Column::from_values("id", [1i64, 2])]).unwrap();
/// assert!(frame.expectations().column_not_null("id").unwrap().passed());
/// ```
pub trait Expect: TabularData {
    /// Returns an expectation set over this dataset.
    fn expectations(&self) -> ExpectationSet<'_, Self> {
        ExpectationSet::from_existing(self)
    }
}

impl<T: TabularData + ?Sized> Expect for T {}

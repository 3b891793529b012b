//! Content expectations: nulls and set membership of column values.
//!
//! Membership checks work on the distinct values of a column, in order of
//! first occurrence, so each offending value is reported once.

use crate::{CheckOutcome, Diagnostic, ExpectationSet, Result};
use expectations_core::{DataValue, TabularData};
use std::collections::HashSet;
use tracing::debug;

impl<D: TabularData + ?Sized> ExpectationSet<'_, D> {
    /// Checks that the column has no null values.
    ///
    /// NaN floats count as null.
    pub fn column_not_null(&self, column: &str) -> Result<CheckOutcome> {
        debug!(column, "Evaluating column_not_null");

        let values = self.values_of(column)?;
        let mut null_rows = values
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_null())
            .map(|(row, _)| row);

        let outcome = match null_rows.next() {
            None => CheckOutcome::pass(),
            Some(first_row) => CheckOutcome::fail(vec![Diagnostic::NullValues {
                column: column.to_string(),
                count: 1 + null_rows.count(),
                first_row,
            }]),
        };

        Ok(outcome)
    }

    /// Checks that every distinct value of the column is in `permitted`.
    ///
    /// A null in the column is a distinct value like any other and fails the
    /// check unless `permitted` contains null. NaN and null are the same value.
    pub fn values_in_set<V: Into<DataValue>>(
        &self,
        column: &str,
        permitted: impl IntoIterator<Item = V>,
    ) -> Result<CheckOutcome> {
        debug!(column, "Evaluating values_in_set");
        self.values_outside(column, collect_set(permitted))
    }

    /// Checks that the distinct values of the column are a subset of `superset`.
    ///
    /// Same semantics as [`values_in_set`](Self::values_in_set).
    pub fn values_subset_of<V: Into<DataValue>>(
        &self,
        column: &str,
        superset: impl IntoIterator<Item = V>,
    ) -> Result<CheckOutcome> {
        debug!(column, "Evaluating values_subset_of");
        self.values_outside(column, collect_set(superset))
    }

    /// Checks that no distinct value of the column is in `forbidden`.
    pub fn values_not_in_set<V: Into<DataValue>>(
        &self,
        column: &str,
        forbidden: impl IntoIterator<Item = V>,
    ) -> Result<CheckOutcome> {
        debug!(column, "Evaluating values_not_in_set");

        let forbidden = collect_set(forbidden);
        let values = self.values_of(column)?;
        let diagnostics = distinct_values(&values)
            .into_iter()
            .filter(|value| forbidden.contains(*value))
            .map(|value| Diagnostic::ValueForbidden {
                column: column.to_string(),
                value: reported(value),
            })
            .collect();

        Ok(CheckOutcome::from_diagnostics(diagnostics))
    }

    fn values_outside(&self, column: &str, allowed: HashSet<DataValue>) -> Result<CheckOutcome> {
        let values = self.values_of(column)?;
        let diagnostics = distinct_values(&values)
            .into_iter()
            .filter(|value| !allowed.contains(*value))
            .map(|value| Diagnostic::ValueNotPermitted {
                column: column.to_string(),
                value: reported(value),
            })
            .collect();

        Ok(CheckOutcome::from_diagnostics(diagnostics))
    }
}

fn collect_set<V: Into<DataValue>>(values: impl IntoIterator<Item = V>) -> HashSet<DataValue> {
    values.into_iter().map(Into::into).collect()
}

/// Missing values are reported as null whatever their storage.
fn reported(value: &DataValue) -> DataValue {
    if value.is_null() {
        DataValue::Null
    } else {
        value.clone()
    }
}

/// Returns each distinct value once, in order of first occurrence.
pub(crate) fn distinct_values(values: &[DataValue]) -> Vec<&DataValue> {
    let mut seen = HashSet::new();
    values.iter().filter(|value| seen.insert(*value)).collect()
}

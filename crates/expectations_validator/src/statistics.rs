//! Statistical expectations over numeric columns.

use crate::{CheckOutcome, Diagnostic, ExpectationError, ExpectationSet, Result};
use expectations_core::{DataValue, TabularData};
use tracing::debug;

impl<D: TabularData + ?Sized> ExpectationSet<'_, D> {
    /// Checks that the arithmetic mean of the column lies in `[min, max]`.
    ///
    /// Nulls (including NaN) are skipped and booleans count as 1 and 0. Both
    /// bounds are inclusive. A column with no numeric values has no mean and
    /// fails with `MeanUndefined`.
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` for an unknown column and `NonNumericValue`
    /// when a non-null value is not a number.
    pub fn mean_between(&self, column: &str, min: f64, max: f64) -> Result<CheckOutcome> {
        let values = self.values_of(column)?;
        let mean = column_mean(column, &values)?;

        debug!(column, ?mean, min, max, "Evaluating mean_between");

        let outcome = match mean {
            None => CheckOutcome::fail(vec![Diagnostic::MeanUndefined {
                column: column.to_string(),
            }]),
            // NaN bounds make both comparisons false, so the check fails
            Some(mean) if min <= mean && mean <= max => CheckOutcome::pass(),
            Some(mean) => CheckOutcome::fail(vec![Diagnostic::MeanOutOfRange {
                column: column.to_string(),
                mean,
                min,
                max,
            }]),
        };

        Ok(outcome)
    }
}

/// Mean of the non-null values, or `None` when there are none.
pub(crate) fn column_mean(column: &str, values: &[DataValue]) -> Result<Option<f64>> {
    let mut sum = 0.0;
    let mut count = 0usize;

    for (row, value) in values.iter().enumerate() {
        if value.is_null() {
            continue;
        }
        let number = match value {
            DataValue::Int(i) => *i as f64,
            DataValue::Float(f) => *f,
            DataValue::Bool(b) => f64::from(u8::from(*b)),
            other => return Err(ExpectationError::non_numeric(column, row, other.type_name())),
        };
        sum += number;
        count += 1;
    }

    Ok((count > 0).then(|| sum / count as f64))
}

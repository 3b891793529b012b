//! Structural expectations: column presence, column set and schema.

use crate::{CheckOutcome, Diagnostic, ExpectationSet, Result};
use expectations_core::{DType, TabularData};
use std::borrow::Borrow;
use tracing::debug;

impl<D: TabularData + ?Sized> ExpectationSet<'_, D> {
    /// Checks that every required column is present.
    ///
    /// Extra columns in the dataset are allowed. Passes iff no required
    /// column is missing, and reports one `MissingColumn` per absent name.
    pub fn has_columns<S: AsRef<str>>(&self, columns: &[S]) -> CheckOutcome {
        debug!(required = columns.len(), "Evaluating has_columns");

        let present = self.dataset().column_names();
        let available = self.available_columns();
        let diagnostics = columns
            .iter()
            .map(|name| name.as_ref())
            .filter(|name| !present.contains(name))
            .map(|name| Diagnostic::MissingColumn {
                column: name.to_string(),
                available: available.clone(),
            })
            .collect();

        CheckOutcome::from_diagnostics(diagnostics)
    }

    /// Checks that the dataset has exactly the given columns, in any order.
    pub fn columns_equal<S: AsRef<str>>(&self, columns: &[S]) -> CheckOutcome {
        debug!(expected = columns.len(), "Evaluating columns_equal");

        let mut actual = self.dataset().column_names();
        actual.sort_unstable();
        let mut expected: Vec<&str> = columns.iter().map(|name| name.as_ref()).collect();
        expected.sort_unstable();

        if actual == expected {
            return CheckOutcome::pass();
        }

        let mut diagnostics = Vec::new();

        if actual.len() != expected.len() {
            diagnostics.push(Diagnostic::ColumnCountMismatch {
                actual: actual.len(),
                expected: expected.len(),
            });
        }

        let mut missing: Vec<String> = expected
            .iter()
            .filter(|name| !actual.contains(*name))
            .map(|name| name.to_string())
            .collect();
        missing.dedup();
        if !missing.is_empty() {
            diagnostics.push(Diagnostic::MissingColumns { columns: missing });
        }

        let unexpected: Vec<String> = actual
            .iter()
            .filter(|name| !expected.contains(*name))
            .map(|name| name.to_string())
            .collect();
        if !unexpected.is_empty() {
            diagnostics.push(Diagnostic::UnexpectedColumns {
                columns: unexpected,
            });
        }

        CheckOutcome::fail(diagnostics)
    }

    /// Checks that each listed column has the expected dtype.
    ///
    /// Columns not named in `schema` are ignored. A named column that does
    /// not exist is a structural error.
    pub fn schema_equal<I, K, T>(&self, schema: I) -> Result<CheckOutcome>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Borrow<DType>,
    {
        let mut diagnostics = Vec::new();

        for (column, expected) in schema {
            let column = column.as_ref();
            let expected = *expected.borrow();
            let actual = self.dtype_of(column)?;

            debug!(column, %actual, %expected, "Evaluating schema_equal column");

            if actual != expected {
                diagnostics.push(Diagnostic::DTypeMismatch {
                    column: column.to_string(),
                    actual,
                    expected,
                });
            }
        }

        Ok(CheckOutcome::from_diagnostics(diagnostics))
    }
}

//! The result of evaluating one expectation.

use crate::Diagnostic;
use serde::Serialize;
use tracing::warn;

/// Boolean outcome of a check plus the diagnostics explaining a failure.
///
/// `passed` is the programmatic result. Diagnostics are ordered in the order
/// the check found them and are empty for a passing check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    passed: bool,
    diagnostics: Vec<Diagnostic>,
}

impl CheckOutcome {
    /// Creates a passing outcome.
    pub fn pass() -> Self {
        Self {
            passed: true,
            diagnostics: Vec::new(),
        }
    }

    /// Creates a failing outcome.
    pub fn fail(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            passed: false,
            diagnostics,
        }
    }

    /// Passes iff no diagnostics were produced.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            passed: diagnostics.is_empty(),
            diagnostics,
        }
    }

    /// Returns true if the expectation was met.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Returns the diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the outcome, returning its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Emits every diagnostic as a `warn!` event tagged with `expectation`.
    pub fn log(&self, expectation: &str) {
        for diagnostic in &self.diagnostics {
            warn!(expectation, column = diagnostic.column(), "{}", diagnostic);
        }
    }
}

impl From<CheckOutcome> for bool {
    fn from(outcome: CheckOutcome) -> Self {
        outcome.passed
    }
}

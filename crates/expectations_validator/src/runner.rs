//! Suite evaluation engine.
//!
//! Runs every expectation of an [`ExpectationSuite`] against one dataset and
//! collects the outcomes into a [`SuiteReport`].

use crate::{CheckOutcome, Diagnostic, ExpectationSet, Result};
use expectations_core::{Expectation, ExpectationSuite, TabularData};
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::{info, warn};

/// Options for a suite run.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Skip the remaining expectations after the first one that does not pass
    pub fail_fast: bool,

    /// Forward diagnostics and evaluation errors to `tracing`
    pub log_diagnostics: bool,
}

impl RunOptions {
    /// Creates run options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets fail-fast mode.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Sets whether diagnostics are logged.
    pub fn with_log_diagnostics(mut self, log_diagnostics: bool) -> Self {
        self.log_diagnostics = log_diagnostics;
        self
    }
}

/// Status of one expectation in a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectationStatus {
    /// The expectation was met
    Passed,
    /// The expectation was not met
    Failed,
    /// The expectation could not be evaluated
    Errored {
        /// Error message
        message: String,
    },
    /// The expectation was not evaluated because of fail-fast
    Skipped,
}

impl ExpectationStatus {
    /// Returns a short lowercase label for the status.
    pub fn label(&self) -> &'static str {
        match self {
            ExpectationStatus::Passed => "passed",
            ExpectationStatus::Failed => "failed",
            ExpectationStatus::Errored { .. } => "errored",
            ExpectationStatus::Skipped => "skipped",
        }
    }
}

impl fmt::Display for ExpectationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectationStatus::Errored { message } => write!(f, "errored: {}", message),
            other => write!(f, "{}", other.label()),
        }
    }
}

/// Result of one expectation in a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpectationResult {
    /// Expectation identifier, e.g. `mean_between`
    pub expectation: String,

    /// Target column, for column-scoped expectations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    /// Outcome status
    pub status: ExpectationStatus,

    /// Diagnostics explaining a failure
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl ExpectationResult {
    fn new(expectation: &Expectation, status: ExpectationStatus) -> Self {
        Self {
            expectation: expectation.name().to_string(),
            column: expectation.column().map(str::to_string),
            status,
            diagnostics: Vec::new(),
        }
    }

    /// Returns true if the expectation was met.
    pub fn passed(&self) -> bool {
        self.status == ExpectationStatus::Passed
    }
}

/// Run statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    /// Rows in the dataset
    pub rows: usize,
    /// Expectations that were evaluated (not skipped)
    pub evaluated: usize,
    /// Expectations that passed
    pub passed: usize,
    /// Expectations that failed
    pub failed: usize,
    /// Expectations that could not be evaluated
    pub errored: usize,
    /// Expectations skipped by fail-fast
    pub skipped: usize,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

/// Report of a suite run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteReport {
    /// Suite name
    pub suite: String,

    /// True iff no expectation failed or errored
    pub passed: bool,

    /// One result per expectation, in suite order
    pub results: Vec<ExpectationResult>,

    /// Run statistics
    pub stats: RunStats,
}

impl SuiteReport {
    /// Returns the results that failed or errored.
    pub fn failures(&self) -> impl Iterator<Item = &ExpectationResult> {
        self.results.iter().filter(|result| {
            matches!(
                result.status,
                ExpectationStatus::Failed | ExpectationStatus::Errored { .. }
            )
        })
    }
}

impl<D: TabularData + ?Sized> ExpectationSet<'_, D> {
    /// Evaluates a declarative expectation against the dataset.
    pub fn evaluate(&self, expectation: &Expectation) -> Result<CheckOutcome> {
        match expectation {
            Expectation::HasColumns { columns } => Ok(self.has_columns(columns)),
            Expectation::ColumnsEqual { columns } => Ok(self.columns_equal(columns)),
            Expectation::SchemaEqual { schema } => self.schema_equal(schema),
            Expectation::ColumnNotNull { column } => self.column_not_null(column),
            Expectation::ValuesInSet { column, values } => self.values_in_set(column, values),
            Expectation::ValuesSubsetOf { column, superset } => {
                self.values_subset_of(column, superset)
            }
            Expectation::ValuesNotInSet { column, values } => {
                self.values_not_in_set(column, values)
            }
            Expectation::MeanBetween { column, min, max } => {
                self.mean_between(column, *min, *max)
            }
        }
    }
}

/// Evaluates expectation suites against datasets.
///
/// # Example
///
/// ```rust
/// use expectations_core::{Column, DataFrame, SuiteBuilder};
/// use expectations_validator::{RunOptions, SuiteRunner};
///
/// let frame = DataFrame::new(vec![Column::from_values("price", [10.0, 20.0])]).unwrap();
/// let suite = SuiteBuilder::new("prices")
///     .column_not_null("price")
///     .mean_between("price", 0.0, 100.0)
///     .build();
///
/// let report = SuiteRunner::new().run(&suite, &frame, &RunOptions::new());
/// assert!(report.passed);
/// assert_eq!(report.stats.passed, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SuiteRunner;

impl SuiteRunner {
    /// Creates a new suite runner.
    pub fn new() -> Self {
        Self
    }

    /// Runs every expectation of `suite` against `data`.
    ///
    /// Each expectation is evaluated independently. An expectation that
    /// cannot be evaluated is reported as `Errored` and does not stop the run.
    pub fn run<D: TabularData + ?Sized>(
        &self,
        suite: &ExpectationSuite,
        data: &D,
        options: &RunOptions,
    ) -> SuiteReport {
        let start = Instant::now();
        let rows = data.row_count();

        info!(
            suite = %suite.name,
            expectations = suite.len(),
            rows,
            "Running expectation suite"
        );

        let set = ExpectationSet::from_existing(data);
        let mut results = Vec::with_capacity(suite.len());
        let mut stopped = false;

        for expectation in &suite.expectations {
            if stopped {
                results.push(ExpectationResult::new(
                    expectation,
                    ExpectationStatus::Skipped,
                ));
                continue;
            }

            let result = self.evaluate_one(&set, expectation, options);
            if options.fail_fast && !result.passed() {
                stopped = true;
            }
            results.push(result);
        }

        let report = build_report(suite, results, rows, start);

        info!(
            suite = %report.suite,
            passed = report.passed,
            failed = report.stats.failed,
            errored = report.stats.errored,
            skipped = report.stats.skipped,
            duration_ms = report.stats.duration_ms,
            "Expectation suite finished"
        );

        report
    }

    fn evaluate_one<D: TabularData + ?Sized>(
        &self,
        set: &ExpectationSet<'_, D>,
        expectation: &Expectation,
        options: &RunOptions,
    ) -> ExpectationResult {
        match set.evaluate(expectation) {
            Ok(outcome) => {
                if options.log_diagnostics {
                    outcome.log(expectation.name());
                }

                let status = if outcome.passed() {
                    ExpectationStatus::Passed
                } else {
                    ExpectationStatus::Failed
                };
                let mut result = ExpectationResult::new(expectation, status);
                result.diagnostics = outcome.into_diagnostics();
                result
            }
            Err(err) => {
                if options.log_diagnostics {
                    warn!(
                        expectation = expectation.name(),
                        error = %err,
                        "Expectation could not be evaluated"
                    );
                }

                ExpectationResult::new(
                    expectation,
                    ExpectationStatus::Errored {
                        message: err.to_string(),
                    },
                )
            }
        }
    }
}

impl Default for SuiteRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn build_report(
    suite: &ExpectationSuite,
    results: Vec<ExpectationResult>,
    rows: usize,
    start: Instant,
) -> SuiteReport {
    let mut stats = RunStats {
        rows,
        ..RunStats::default()
    };

    for result in &results {
        match result.status {
            ExpectationStatus::Passed => stats.passed += 1,
            ExpectationStatus::Failed => stats.failed += 1,
            ExpectationStatus::Errored { .. } => stats.errored += 1,
            ExpectationStatus::Skipped => stats.skipped += 1,
        }
    }
    stats.evaluated = stats.passed + stats.failed + stats.errored;
    stats.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    SuiteReport {
        suite: suite.name.clone(),
        passed: stats.failed == 0 && stats.errored == 0,
        results,
        stats,
    }
}

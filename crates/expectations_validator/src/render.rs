//! Human and machine readable rendering of suite reports.
//!
//! Rendering only builds strings. Where they are printed or written is up
//! to the caller.

use crate::{ExpectationStatus, SuiteReport};
use colored::*;
use std::fmt::Write;
use std::str::FromStr;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored, human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format '{}', expected 'text' or 'json'",
                other
            )),
        }
    }
}

/// Renders a report in the requested format.
pub fn render_report(report: &SuiteReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report),
    }
}

/// Renders a report as colored text.
///
/// Coloring follows the `colored` crate's global settings, so it is dropped
/// automatically when `NO_COLOR` is set or output is not a terminal.
pub fn render_text(report: &SuiteReport) -> String {
    let rule = "═".repeat(60);
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "  {} {}", "EXPECTATION SUITE".bold(), report.suite.bold());
    let _ = writeln!(out, "{}", rule);

    if report.passed {
        let _ = writeln!(out, "\n{} {}", "✓".green().bold(), "Suite PASSED".green().bold());
    } else {
        let _ = writeln!(out, "\n{} {}", "✗".red().bold(), "Suite FAILED".red().bold());
    }

    if !report.results.is_empty() {
        let _ = writeln!(out, "\n{}", "Expectations:".bold());
    }
    for (i, result) in report.results.iter().enumerate() {
        let target = match &result.column {
            Some(column) => format!("{} ({})", result.expectation, column),
            None => result.expectation.clone(),
        };
        let status = match &result.status {
            ExpectationStatus::Passed => "PASS".green().bold(),
            ExpectationStatus::Failed => "FAIL".red().bold(),
            ExpectationStatus::Errored { .. } => "ERROR".red().bold(),
            ExpectationStatus::Skipped => "SKIP".yellow().bold(),
        };
        let _ = writeln!(out, "  {}. [{}] {}", i + 1, status, target);

        if let ExpectationStatus::Errored { message } = &result.status {
            let _ = writeln!(out, "       {}", message.red());
        }
        for diagnostic in &result.diagnostics {
            let _ = writeln!(out, "       - {}", diagnostic.to_string().yellow());
        }
    }

    let stats = &report.stats;
    let _ = writeln!(out, "\n{}", "Summary:".bold());
    let _ = writeln!(out, "  Rows:      {}", stats.rows);
    let _ = writeln!(out, "  Evaluated: {}", stats.evaluated);
    let _ = writeln!(out, "  Passed:    {}", stats.passed);
    let _ = writeln!(out, "  Failed:    {}", stats.failed);
    let _ = writeln!(out, "  Errored:   {}", stats.errored);
    let _ = writeln!(out, "  Skipped:   {}", stats.skipped);
    let _ = writeln!(out, "  Duration:  {} ms", stats.duration_ms);
    let _ = write!(out, "{}", rule);

    out
}

/// Renders a report as pretty-printed JSON.
pub fn render_json(report: &SuiteReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|err| {
        serde_json::json!({
            "suite": report.suite,
            "passed": report.passed,
            "error": err.to_string(),
        })
        .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RunOptions, SuiteRunner};
    use expectations_core::{Column, DataFrame, SuiteBuilder};
    use pretty_assertions::assert_eq;

    fn report() -> SuiteReport {
        let frame = DataFrame::new(vec![
            Column::from_values("id", [1i64, 2, 3]),
            Column::from_values("status", ["active", "pending", "active"]),
        ])
        .unwrap();
        let suite = SuiteBuilder::new("users")
            .column_not_null("id")
            .values_in_set("status", ["active"])
            .mean_between("age", 0.0, 100.0)
            .build();
        SuiteRunner::new().run(&suite, &frame, &RunOptions::new())
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_render_text() {
        colored::control::set_override(false);
        let text = render_text(&report());

        assert!(text.contains("EXPECTATION SUITE users"));
        assert!(text.contains("Suite FAILED"));
        assert!(text.contains("1. [PASS] column_not_null (id)"));
        assert!(text.contains("2. [FAIL] values_in_set (status)"));
        assert!(text.contains("Value 'pending' in column 'status' is not in the permitted set"));
        assert!(text.contains("3. [ERROR] mean_between (age)"));
        assert!(text.contains("Column 'age' not found"));
        assert!(text.contains("Failed:    1"));
    }

    #[test]
    fn test_render_json() {
        let json = render_report(&report(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["suite"], "users");
        assert_eq!(value["passed"], false);
        assert_eq!(value["results"][0]["status"], "passed");
        assert_eq!(value["results"][1]["status"], "failed");
        assert_eq!(
            value["results"][1]["diagnostics"][0]["kind"],
            "value_not_permitted"
        );
        assert_eq!(value["results"][1]["diagnostics"][0]["value"], "pending");
        assert!(value["results"][2]["status"]["errored"]["message"].is_string());
        assert_eq!(value["stats"]["errored"], 1);
    }
}

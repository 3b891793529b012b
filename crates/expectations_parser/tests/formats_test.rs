//! Loading the same suite from each supported format.

use expectations_core::{Expectation, ExpectationSuite, SuiteBuilder};
use expectations_parser::{ParserError, SuiteFormat, detect_format, parse_str};
use pretty_assertions::assert_eq;
use std::path::Path;

fn expected_suite() -> ExpectationSuite {
    SuiteBuilder::new("orders")
        .description("Order table checks")
        .has_columns(["order_id", "status"])
        .column_not_null("order_id")
        .values_in_set("status", ["shipped", "pending"])
        .mean_between("amount", 0.0, 1000.0)
        .build()
}

const YAML: &str = r#"
name: orders
description: Order table checks
expectations:
  - expect: has_columns
    columns: [order_id, status]
  - expect: column_not_null
    column: order_id
  - expect: values_in_set
    column: status
    values: [shipped, pending]
  - expect: mean_between
    column: amount
    min: 0
    max: 1000
"#;

const TOML: &str = r#"
name = "orders"
description = "Order table checks"

[[expectations]]
expect = "has_columns"
columns = ["order_id", "status"]

[[expectations]]
expect = "column_not_null"
column = "order_id"

[[expectations]]
expect = "values_in_set"
column = "status"
values = ["shipped", "pending"]

[[expectations]]
expect = "mean_between"
column = "amount"
min = 0.0
max = 1000.0
"#;

#[test]
fn test_every_format_loads_the_same_suite() {
    let json = serde_json::to_string_pretty(&expected_suite()).unwrap();

    for (name, content) in [
        ("orders.yaml", YAML),
        ("orders.yml", YAML),
        ("orders.toml", TOML),
        ("orders.json", json.as_str()),
    ] {
        let format = detect_format(Path::new(name)).unwrap();
        let suite = parse_str(content, format).unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert_eq!(suite, expected_suite(), "mismatch loading {}", name);
    }
}

#[test]
fn test_extension_checked_case_insensitively() {
    let format = detect_format(Path::new("ORDERS.YAML")).unwrap();
    assert_eq!(format, SuiteFormat::Yaml);

    let suite = parse_str(YAML, format).unwrap();
    assert!(matches!(
        suite.expectations[1],
        Expectation::ColumnNotNull { ref column } if column == "order_id"
    ));
}

#[test]
fn test_unsupported_and_missing_extension() {
    let err = detect_format(Path::new("orders.ini")).unwrap_err();
    assert!(matches!(err, ParserError::UnsupportedFormat(ext) if ext == "ini"));

    assert!(matches!(
        detect_format(Path::new("orders")).unwrap_err(),
        ParserError::InvalidExtension
    ));
}

#[test]
fn test_content_in_the_wrong_format_is_rejected() {
    assert!(parse_str(TOML, SuiteFormat::Json).is_err());
    assert!(matches!(
        parse_str(YAML, SuiteFormat::Toml).unwrap_err(),
        ParserError::Toml(_)
    ));
}

#[test]
fn test_malformed_content_reports_format() {
    let err = parse_str("{\"name\": ", SuiteFormat::Json).unwrap_err();
    assert!(matches!(err, ParserError::Json(_)));
    assert!(err.to_string().starts_with("Failed to parse JSON"));
}

//! Loader for expectation suites (YAML/TOML/JSON formats).
//!
//! This crate parses suite text supplied by the caller into the
//! strongly-typed `ExpectationSuite` structure that the validator runs. It
//! never reads files; callers that keep suites on disk read them and pick a
//! format with [`detect_format`].
//!
//! # Example
//!
//! ```rust
//! use expectations_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: users
//! description: Checks on the users table
//! expectations:
//!   - expect: has_columns
//!     columns: [id, email]
//!   - expect: mean_between
//!     column: age
//!     min: 18
//!     max: 65
//! "#;
//!
//! let suite = parse_yaml(yaml).expect("Failed to parse suite");
//! assert_eq!(suite.name, "users");
//! assert_eq!(suite.expectations.len(), 2);
//! ```

use expectations_core::ExpectationSuite;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during suite parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    Toml(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported suite file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Parse a suite from a YAML string.
///
/// # Example
///
/// ```rust
/// use expectations_parser::parse_yaml;
///
/// let yaml = r#"
/// name: empty
/// "#;
///
/// let suite = parse_yaml(yaml).unwrap();
/// assert!(suite.expectations.is_empty());
/// ```
pub fn parse_yaml(content: &str) -> Result<ExpectationSuite> {
    let suite: ExpectationSuite = serde_yaml_ng::from_str(content)?;
    Ok(suite)
}

/// Parse a suite from a TOML string.
///
/// # Example
///
/// ```rust
/// use expectations_parser::parse_toml;
///
/// let toml = r#"
/// name = "orders"
///
/// [[expectations]]
/// expect = "column_not_null"
/// column = "order_id"
/// "#;
///
/// let suite = parse_toml(toml).unwrap();
/// assert_eq!(suite.expectations[0].column(), Some("order_id"));
/// ```
pub fn parse_toml(content: &str) -> Result<ExpectationSuite> {
    let suite: ExpectationSuite =
        toml::from_str(content).map_err(|e| ParserError::Toml(e.to_string()))?;
    Ok(suite)
}

/// Parse a suite from a JSON string.
pub fn parse_json(content: &str) -> Result<ExpectationSuite> {
    let suite: ExpectationSuite = serde_json::from_str(content)?;
    Ok(suite)
}

/// Parse a suite from a string in the given format.
pub fn parse_str(content: &str, format: SuiteFormat) -> Result<ExpectationSuite> {
    match format {
        SuiteFormat::Yaml => parse_yaml(content),
        SuiteFormat::Toml => parse_toml(content),
        SuiteFormat::Json => parse_json(content),
    }
}

/// Detect the suite format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `SuiteFormat::Yaml`
/// * `.toml` → `SuiteFormat::Toml`
/// * `.json` → `SuiteFormat::Json`
///
/// Matching is case-insensitive.
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<SuiteFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(SuiteFormat::Yaml),
        "toml" => Ok(SuiteFormat::Toml),
        "json" => Ok(SuiteFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

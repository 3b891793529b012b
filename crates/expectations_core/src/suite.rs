//! Declarative expectation suites.
//!
//! A suite is the configuration form of a set of checks: it can be written
//! in YAML, TOML or JSON, built in code with [`SuiteBuilder`](crate::SuiteBuilder),
//! and evaluated against any dataset by the validator crate.

use crate::{DType, DataValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named list of expectations evaluated together.
///
/// # Example
///
/// ```rust
/// use expectations_core::{Expectation, ExpectationSuite};
///
/// let suite = ExpectationSuite {
///     name: "orders".to_string(),
///     description: None,
///     expectations: vec![Expectation::ColumnNotNull {
///         column: "order_id".to_string(),
///     }],
/// };
/// assert_eq!(suite.expectations[0].name(), "column_not_null");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectationSuite {
    /// Suite name, used in reports
    pub name: String,

    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Expectations, evaluated in order
    #[serde(default)]
    pub expectations: Vec<Expectation>,
}

impl ExpectationSuite {
    /// Returns the number of expectations in the suite.
    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    /// Returns true if the suite has no expectations.
    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }
}

/// A single declarative expectation.
///
/// Tagged by `expect` in serialized form, e.g.
/// `{ "expect": "mean_between", "column": "price", "min": 0, "max": 100 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "expect", rename_all = "snake_case")]
pub enum Expectation {
    /// Every listed column is present; extra columns are allowed
    HasColumns {
        /// Required column names
        columns: Vec<String>,
    },

    /// The dataset has exactly these columns, in any order
    ColumnsEqual {
        /// Expected column names
        columns: Vec<String>,
    },

    /// Each listed column has the given dtype
    SchemaEqual {
        /// Column name to expected dtype
        schema: BTreeMap<String, DType>,
    },

    /// The column has no null values
    ColumnNotNull {
        /// Target column
        column: String,
    },

    /// Every distinct value of the column is permitted
    ValuesInSet {
        /// Target column
        column: String,
        /// Permitted values
        values: Vec<DataValue>,
    },

    /// Every distinct value of the column is in the superset
    ValuesSubsetOf {
        /// Target column
        column: String,
        /// Superset of allowed values
        superset: Vec<DataValue>,
    },

    /// No distinct value of the column is forbidden
    ValuesNotInSet {
        /// Target column
        column: String,
        /// Forbidden values
        values: Vec<DataValue>,
    },

    /// The column mean lies within `[min, max]`
    MeanBetween {
        /// Target column
        column: String,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },
}

impl Expectation {
    /// Returns the expectation's identifier, as used in the `expect` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Expectation::HasColumns { .. } => "has_columns",
            Expectation::ColumnsEqual { .. } => "columns_equal",
            Expectation::SchemaEqual { .. } => "schema_equal",
            Expectation::ColumnNotNull { .. } => "column_not_null",
            Expectation::ValuesInSet { .. } => "values_in_set",
            Expectation::ValuesSubsetOf { .. } => "values_subset_of",
            Expectation::ValuesNotInSet { .. } => "values_not_in_set",
            Expectation::MeanBetween { .. } => "mean_between",
        }
    }

    /// Returns the target column of column-scoped expectations.
    pub fn column(&self) -> Option<&str> {
        match self {
            Expectation::ColumnNotNull { column }
            | Expectation::ValuesInSet { column, .. }
            | Expectation::ValuesSubsetOf { column, .. }
            | Expectation::ValuesNotInSet { column, .. }
            | Expectation::MeanBetween { column, .. } => Some(column),
            Expectation::HasColumns { .. }
            | Expectation::ColumnsEqual { .. }
            | Expectation::SchemaEqual { .. } => None,
        }
    }
}

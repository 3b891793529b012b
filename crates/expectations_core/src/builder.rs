//! Builder pattern for creating expectation suites.

use crate::{DType, DataValue, Expectation, ExpectationSuite};

/// Builder for creating an `ExpectationSuite`.
///
/// # Example
///
/// ```rust
/// use expectations_core::{DType, SuiteBuilder};
///
/// let suite = SuiteBuilder::new("orders")
///     .description("Nightly order export")
///     .has_columns(["order_id", "amount", "status"])
///     .schema_equal([("order_id", DType::Int64), ("amount", DType::Float64)])
///     .column_not_null("order_id")
///     .values_in_set("status", ["open", "shipped", "closed"])
///     .mean_between("amount", 0.0, 500.0)
///     .build();
///
/// assert_eq!(suite.expectations.len(), 5);
/// ```
#[derive(Debug, Default)]
pub struct SuiteBuilder {
    name: String,
    description: Option<String>,
    expectations: Vec<Expectation>,
}

impl SuiteBuilder {
    /// Creates a new suite builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the suite description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an already constructed expectation.
    pub fn expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// Requires the given columns to be present.
    pub fn has_columns<S: Into<String>>(self, columns: impl IntoIterator<Item = S>) -> Self {
        self.expectation(Expectation::HasColumns {
            columns: strings(columns),
        })
    }

    /// Requires exactly the given columns, in any order.
    pub fn columns_equal<S: Into<String>>(self, columns: impl IntoIterator<Item = S>) -> Self {
        self.expectation(Expectation::ColumnsEqual {
            columns: strings(columns),
        })
    }

    /// Requires the listed columns to have the given dtypes.
    pub fn schema_equal<S: Into<String>>(
        self,
        schema: impl IntoIterator<Item = (S, DType)>,
    ) -> Self {
        self.expectation(Expectation::SchemaEqual {
            schema: schema.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        })
    }

    /// Requires the column to have no nulls.
    pub fn column_not_null(self, column: impl Into<String>) -> Self {
        self.expectation(Expectation::ColumnNotNull {
            column: column.into(),
        })
    }

    /// Requires every distinct value of the column to be permitted.
    pub fn values_in_set<V: Into<DataValue>>(
        self,
        column: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.expectation(Expectation::ValuesInSet {
            column: column.into(),
            values: data_values(values),
        })
    }

    /// Requires every distinct value of the column to be in the superset.
    pub fn values_subset_of<V: Into<DataValue>>(
        self,
        column: impl Into<String>,
        superset: impl IntoIterator<Item = V>,
    ) -> Self {
        self.expectation(Expectation::ValuesSubsetOf {
            column: column.into(),
            superset: data_values(superset),
        })
    }

    /// Forbids the given values in the column.
    pub fn values_not_in_set<V: Into<DataValue>>(
        self,
        column: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.expectation(Expectation::ValuesNotInSet {
            column: column.into(),
            values: data_values(values),
        })
    }

    /// Requires the column mean to be within `[min, max]`.
    pub fn mean_between(self, column: impl Into<String>, min: f64, max: f64) -> Self {
        self.expectation(Expectation::MeanBetween {
            column: column.into(),
            min,
            max,
        })
    }

    /// Builds the suite.
    pub fn build(self) -> ExpectationSuite {
        ExpectationSuite {
            name: self.name,
            description: self.description,
            expectations: self.expectations,
        }
    }
}

fn strings<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    items.into_iter().map(Into::into).collect()
}

fn data_values<V: Into<DataValue>>(items: impl IntoIterator<Item = V>) -> Vec<DataValue> {
    items.into_iter().map(Into::into).collect()
}

//! In-memory columnar dataset.
//!
//! `DataFrame` is the dataset the expectation layer is usually pointed at.
//! It keeps rows positionally aligned across named, typed columns.

use crate::{CoreError, DType, DataValue, Result};

/// A named, typed sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    dtype: DType,
    values: Vec<DataValue>,
}

impl Column {
    /// Creates a column whose dtype is inferred from its values.
    pub fn new(name: impl Into<String>, values: Vec<DataValue>) -> Self {
        let dtype = DType::infer(&values);
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Creates a column with a declared dtype.
    ///
    /// Fails if a non-null value does not fit `dtype`.
    pub fn with_dtype(
        name: impl Into<String>,
        dtype: DType,
        values: Vec<DataValue>,
    ) -> Result<Self> {
        let name = name.into();
        if let Some((row, value)) = values.iter().enumerate().find(|(_, v)| !dtype.accepts(v)) {
            return Err(CoreError::value_type_mismatch(
                name,
                row,
                dtype.name(),
                value.type_name(),
            ));
        }

        Ok(Self {
            name,
            dtype,
            values,
        })
    }

    /// Creates a column from anything convertible into values.
    pub fn from_values<V: Into<DataValue>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::new(name, values.into_iter().map(Into::into).collect())
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column dtype.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Returns the column values.
    pub fn values(&self) -> &[DataValue] {
        &self.values
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of null values.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}

/// An ordered collection of equally long, uniquely named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    /// Creates an empty dataset with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a dataset from columns.
    ///
    /// Column names must be unique and all columns must have the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut frame = Self::empty();
        for column in columns {
            frame.insert_column(column)?;
        }
        Ok(frame)
    }

    /// Creates a dataset from row-oriented data.
    ///
    /// Every row must have one value per name. Column dtypes are inferred.
    pub fn from_rows<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        rows: impl IntoIterator<Item = Vec<DataValue>>,
    ) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut buffers: Vec<Vec<DataValue>> = vec![Vec::new(); names.len()];

        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != names.len() {
                return Err(CoreError::RowWidthMismatch {
                    row: row_idx,
                    expected: names.len(),
                    actual: row.len(),
                });
            }
            for (buffer, value) in buffers.iter_mut().zip(row) {
                buffer.push(value);
            }
        }

        Self::new(
            names
                .into_iter()
                .zip(buffers)
                .map(|(name, values)| Column::new(name, values))
                .collect(),
        )
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    /// Returns the columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Gets a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Gets a single cell.
    pub fn get(&self, row: usize, column: &str) -> Option<&DataValue> {
        self.column(column)?.values.get(row)
    }

    /// Appends a column.
    ///
    /// The name must be new and, unless the dataset has no columns yet, the
    /// length must match the current height.
    pub fn insert_column(&mut self, column: Column) -> Result<()> {
        if self.column(&column.name).is_some() {
            return Err(CoreError::DuplicateColumn(column.name));
        }
        if !self.columns.is_empty() && column.len() != self.height() {
            return Err(CoreError::length_mismatch(
                column.name,
                self.height(),
                column.values.len(),
            ));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Removes a column, returning it if it existed.
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let idx = self.columns.iter().position(|c| c.name == name)?;
        Some(self.columns.remove(idx))
    }

    /// Overwrites a single cell.
    ///
    /// The value must fit the column's dtype.
    pub fn set(&mut self, row: usize, column: &str, value: impl Into<DataValue>) -> Result<()> {
        let value = value.into();
        let height = self.height();
        let target = self
            .columns
            .iter_mut()
            .find(|c| c.name == column)
            .ok_or_else(|| CoreError::column_not_found(column))?;

        if row >= height {
            return Err(CoreError::RowOutOfBounds { row, height });
        }
        if !target.dtype.accepts(&value) {
            return Err(CoreError::value_type_mismatch(
                column,
                row,
                target.dtype.name(),
                value.type_name(),
            ));
        }

        target.values[row] = value;
        Ok(())
    }
}

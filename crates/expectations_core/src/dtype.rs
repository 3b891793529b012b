//! Column value types.

use crate::{CoreError, DataValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The value type of a column.
///
/// Serialized as its canonical lowercase name, e.g. `"int64"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DType {
    /// 64-bit signed integers
    Int64,
    /// 64-bit floats
    Float64,
    /// Booleans
    Boolean,
    /// UTF-8 strings
    String,
    /// UTC timestamps
    Timestamp,
    /// Mixed or unknown values
    Object,
}

impl DType {
    /// Returns the canonical name of this dtype.
    pub fn name(&self) -> &'static str {
        match self {
            DType::Int64 => "int64",
            DType::Float64 => "float64",
            DType::Boolean => "boolean",
            DType::String => "string",
            DType::Timestamp => "timestamp",
            DType::Object => "object",
        }
    }

    /// Returns true for `Int64` and `Float64`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DType::Int64 | DType::Float64)
    }

    /// Returns true if `value` may be stored in a column of this dtype.
    ///
    /// Nulls fit every dtype and integers fit `Float64`.
    pub fn accepts(&self, value: &DataValue) -> bool {
        match (self, value) {
            (_, DataValue::Null) => true,
            (DType::Object, _) => true,
            (DType::Int64, DataValue::Int(_)) => true,
            (DType::Float64, DataValue::Float(_) | DataValue::Int(_)) => true,
            (DType::Boolean, DataValue::Bool(_)) => true,
            (DType::String, DataValue::String(_)) => true,
            (DType::Timestamp, DataValue::Timestamp(_)) => true,
            _ => false,
        }
    }

    /// Infers the dtype of a sequence of values.
    ///
    /// Nulls are ignored. Integers mixed with floats widen to `Float64`; any
    /// other mix, or no non-null value at all, gives `Object`.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a DataValue>) -> DType {
        let mut inferred: Option<DType> = None;

        for value in values {
            let current = match value {
                DataValue::Null => continue,
                DataValue::Bool(_) => DType::Boolean,
                DataValue::Int(_) => DType::Int64,
                DataValue::Float(_) => DType::Float64,
                DataValue::String(_) => DType::String,
                DataValue::Timestamp(_) => DType::Timestamp,
            };

            inferred = Some(match inferred {
                None => current,
                Some(prev) if prev == current => prev,
                Some(prev) if prev.is_numeric() && current.is_numeric() => DType::Float64,
                Some(_) => return DType::Object,
            });
        }

        inferred.unwrap_or(DType::Object)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_type(s).as_str() {
            "int" | "int64" | "integer" | "long" | "i64" => Ok(DType::Int64),
            "float" | "float64" | "double" | "f64" => Ok(DType::Float64),
            "bool" | "boolean" => Ok(DType::Boolean),
            "string" | "str" | "utf8" | "text" => Ok(DType::String),
            "timestamp" | "datetime" => Ok(DType::Timestamp),
            "object" | "any" | "mixed" => Ok(DType::Object),
            _ => Err(CoreError::UnknownDType(s.to_string())),
        }
    }
}

impl TryFrom<String> for DType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DType> for String {
    fn from(dtype: DType) -> Self {
        dtype.name().to_string()
    }
}

/// Normalizes a type string for comparison.
fn normalize_type(type_str: &str) -> String {
    type_str.trim().to_lowercase()
}

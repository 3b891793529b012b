//! Scalar cell values.
//!
//! `DataValue` is what a column holds. Its equality is the "native" equality
//! used for distinct-value and membership checks, so it is implemented by
//! hand rather than derived.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A value in a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    /// Null/missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Timestamp value (UTC)
    Timestamp(DateTime<Utc>),
}

impl DataValue {
    /// Returns true if this value is missing.
    ///
    /// A NaN float counts as missing, matching the usual dataframe convention,
    /// and compares equal to `Null`.
    pub fn is_null(&self) -> bool {
        match self {
            DataValue::Null => true,
            DataValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Bool(_) => "boolean",
            DataValue::Int(_) => "int64",
            DataValue::Float(_) => "float64",
            DataValue::String(_) => "string",
            DataValue::Timestamp(_) => "timestamp",
        }
    }

    /// Returns true for integer and float values.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataValue::Int(_) | DataValue::Float(_))
    }

    /// Attempts to get this value as a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DataValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DataValue::Float(f) => Some(*f),
            DataValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempts to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get this value as a timestamp.
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            DataValue::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }
}

/// Returns the integer a float is exactly equal to, if any.
fn integral_value(f: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything below it and integral fits an i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

impl PartialEq for DataValue {
    fn eq(&self, other: &Self) -> bool {
        use DataValue::*;

        match (self, other) {
            (Null, Null) => true,
            // NaN is a missing value, so it is the same value as null
            (Null, Float(f)) | (Float(f), Null) => f.is_nan(),
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Int(i), Float(f)) | (Float(f), Int(i)) => integral_value(*f) == Some(*i),
            (String(a), String(b)) => a == b,
            (Timestamp(a), Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for DataValue {}

impl Hash for DataValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            DataValue::Null => 0u8.hash(state),
            DataValue::Bool(b) => {
                1u8.hash(state);
                b.hash(state);
            }
            DataValue::Int(i) => {
                2u8.hash(state);
                i.hash(state);
            }
            // Must collide with null
            DataValue::Float(f) if f.is_nan() => 0u8.hash(state),
            DataValue::Float(f) => match integral_value(*f) {
                // Must collide with the equal Int
                Some(i) => {
                    2u8.hash(state);
                    i.hash(state);
                }
                None => {
                    3u8.hash(state);
                    f.to_bits().hash(state);
                }
            },
            DataValue::String(s) => {
                4u8.hash(state);
                s.hash(state);
            }
            DataValue::Timestamp(ts) => {
                5u8.hash(state);
                ts.hash(state);
            }
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => write!(f, "null"),
            DataValue::Bool(b) => write!(f, "{}", b),
            DataValue::Int(i) => write!(f, "{}", i),
            DataValue::Float(x) => write!(f, "{}", x),
            DataValue::String(s) => write!(f, "{}", s),
            DataValue::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<i32> for DataValue {
    fn from(i: i32) -> Self {
        DataValue::Int(i as i64)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for DataValue {
    fn from(ts: DateTime<Utc>) -> Self {
        DataValue::Timestamp(ts)
    }
}

impl From<&DataValue> for DataValue {
    fn from(value: &DataValue) -> Self {
        value.clone()
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DataValue::Null, Into::into)
    }
}

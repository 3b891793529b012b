//! `TabularData` for Arrow record batches.
//!
//! Values are converted on every call; nothing is cached on the batch.
//! Dictionary arrays are decoded through their values array. A storage type
//! with no value mapping is reported as an error, never read as nulls.

use crate::{CoreError, DType, DataValue, Result, TabularData};
use arrow_array::cast::AsArray;
use arrow_array::types::{
    ArrowTemporalType, Date32Type, Date64Type, Decimal128Type, Float16Type, Float32Type,
    Float64Type, Int8Type, Int16Type, Int32Type, Int64Type, TimestampMicrosecondType,
    TimestampMillisecondType, TimestampNanosecondType, TimestampSecondType, UInt8Type,
    UInt16Type, UInt32Type, UInt64Type,
};
use arrow_array::{Array, PrimitiveArray, RecordBatch};
use arrow_schema::{DataType, TimeUnit};
use std::borrow::Cow;
use tracing::warn;

impl TabularData for RecordBatch {
    fn column_names(&self) -> Vec<&str> {
        self.schema_ref()
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect()
    }

    fn column_dtype(&self, name: &str) -> Option<DType> {
        self.column_by_name(name)
            .map(|array| arrow_type_to_dtype(array.data_type()))
    }

    fn column_values(&self, name: &str) -> Option<Result<Cow<'_, [DataValue]>>> {
        self.column_by_name(name)
            .map(|array| array_to_values(name, array.as_ref()).map(Cow::Owned))
    }

    fn row_count(&self) -> usize {
        self.num_rows()
    }

    fn has_column(&self, name: &str) -> bool {
        self.column_by_name(name).is_some()
    }
}

/// Maps an Arrow type to the dtype its converted values carry.
pub fn arrow_type_to_dtype(data_type: &DataType) -> DType {
    match data_type {
        DataType::Boolean => DType::Boolean,
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => DType::Int64,
        DataType::Float16 | DataType::Float32 | DataType::Float64 | DataType::Decimal128(_, _) => {
            DType::Float64
        }
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => DType::String,
        DataType::Timestamp(_, _) | DataType::Date32 | DataType::Date64 => DType::Timestamp,
        DataType::Dictionary(_, value_type) => arrow_type_to_dtype(value_type),
        _ => DType::Object,
    }
}

/// Converts a whole Arrow array into values.
///
/// # Errors
///
/// Returns `CoreError::UnsupportedColumnType` for storage types with no
/// value mapping (binary, nested and interval types, among others).
pub fn array_to_values(column: &str, array: &dyn Array) -> Result<Vec<DataValue>> {
    let values = match array.data_type() {
        DataType::Null => vec![DataValue::Null; array.len()],
        DataType::Boolean => {
            let a = array.as_boolean();
            collect(array, |i| DataValue::Bool(a.value(i)))
        }
        DataType::Int8 => ints(array.as_primitive::<Int8Type>()),
        DataType::Int16 => ints(array.as_primitive::<Int16Type>()),
        DataType::Int32 => ints(array.as_primitive::<Int32Type>()),
        DataType::Int64 => ints(array.as_primitive::<Int64Type>()),
        DataType::UInt8 => ints(array.as_primitive::<UInt8Type>()),
        DataType::UInt16 => ints(array.as_primitive::<UInt16Type>()),
        DataType::UInt32 => ints(array.as_primitive::<UInt32Type>()),
        DataType::UInt64 => {
            let a = array.as_primitive::<UInt64Type>();
            collect(array, |i| {
                let v = a.value(i);
                i64::try_from(v).map_or(DataValue::Float(v as f64), DataValue::Int)
            })
        }
        DataType::Float16 => {
            let a = array.as_primitive::<Float16Type>();
            collect(array, |i| DataValue::Float(a.value(i).to_f64()))
        }
        DataType::Float32 => {
            let a = array.as_primitive::<Float32Type>();
            collect(array, |i| DataValue::Float(a.value(i) as f64))
        }
        DataType::Float64 => {
            let a = array.as_primitive::<Float64Type>();
            collect(array, |i| DataValue::Float(a.value(i)))
        }
        DataType::Decimal128(_, scale) => {
            let a = array.as_primitive::<Decimal128Type>();
            let factor = 10f64.powi(i32::from(*scale));
            collect(array, |i| DataValue::Float(a.value(i) as f64 / factor))
        }
        DataType::Utf8 => {
            let a = array.as_string::<i32>();
            collect(array, |i| DataValue::String(a.value(i).to_string()))
        }
        DataType::LargeUtf8 => {
            let a = array.as_string::<i64>();
            collect(array, |i| DataValue::String(a.value(i).to_string()))
        }
        DataType::Utf8View => {
            let a = array.as_string_view();
            collect(array, |i| DataValue::String(a.value(i).to_string()))
        }
        DataType::Timestamp(TimeUnit::Second, _) => {
            temporal(array.as_primitive::<TimestampSecondType>())
        }
        DataType::Timestamp(TimeUnit::Millisecond, _) => {
            temporal(array.as_primitive::<TimestampMillisecondType>())
        }
        DataType::Timestamp(TimeUnit::Microsecond, _) => {
            temporal(array.as_primitive::<TimestampMicrosecondType>())
        }
        DataType::Timestamp(TimeUnit::Nanosecond, _) => {
            temporal(array.as_primitive::<TimestampNanosecondType>())
        }
        DataType::Date32 => temporal(array.as_primitive::<Date32Type>()),
        DataType::Date64 => temporal(array.as_primitive::<Date64Type>()),
        DataType::Dictionary(_, _) => {
            let dict = array.as_any_dictionary();
            let decoded = array_to_values(column, dict.values().as_ref())?;
            let keys = dict.normalized_keys();
            collect(array, |i| {
                keys.get(i)
                    .and_then(|&key| decoded.get(key))
                    .cloned()
                    .unwrap_or(DataValue::Null)
            })
        }
        other => {
            warn!(column, data_type = ?other, "Unsupported Arrow type");
            return Err(CoreError::unsupported_column_type(column, other.to_string()));
        }
    };

    Ok(values)
}

fn collect(array: &dyn Array, value_at: impl Fn(usize) -> DataValue) -> Vec<DataValue> {
    (0..array.len())
        .map(|i| {
            if array.is_null(i) {
                DataValue::Null
            } else {
                value_at(i)
            }
        })
        .collect()
}

fn ints<T>(array: &PrimitiveArray<T>) -> Vec<DataValue>
where
    T: arrow_array::ArrowPrimitiveType,
    i64: From<T::Native>,
{
    collect(array, |i| DataValue::Int(i64::from(array.value(i))))
}

fn temporal<T>(array: &PrimitiveArray<T>) -> Vec<DataValue>
where
    T: ArrowTemporalType,
    i64: From<T::Native>,
{
    collect(array, |i| {
        array
            .value_as_datetime(i)
            .map_or(DataValue::Null, |dt| DataValue::Timestamp(dt.and_utc()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow_array::{
        ArrayRef, BinaryArray, BooleanArray, Decimal128Array, DictionaryArray, Float64Array,
        Int32Array, StringArray, TimestampMillisecondArray,
    };
    use arrow_schema::{Field, Schema};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn sample_batch() -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int32, false),
            Field::new("score", DataType::Float64, true),
            Field::new("name", DataType::Utf8, true),
            Field::new("active", DataType::Boolean, false),
        ]));
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Int32Array::from(vec![1, 2, 3])),
            Arc::new(Float64Array::from(vec![Some(1.5), None, Some(2.5)])),
            Arc::new(StringArray::from(vec![Some("a"), Some("b"), None])),
            Arc::new(BooleanArray::from(vec![true, false, true])),
        ];
        RecordBatch::try_new(schema, columns).unwrap()
    }

    #[test]
    fn test_record_batch_capabilities() {
        let batch = sample_batch();
        assert_eq!(batch.column_names(), vec!["id", "score", "name", "active"]);
        assert_eq!(TabularData::row_count(&batch), 3);
        assert_eq!(batch.column_dtype("id"), Some(DType::Int64));
        assert_eq!(batch.column_dtype("score"), Some(DType::Float64));
        assert_eq!(batch.column_dtype("name"), Some(DType::String));
        assert_eq!(batch.column_dtype("missing"), None);
    }

    #[test]
    fn test_values_with_nulls() {
        let batch = sample_batch();
        let scores = batch.column_values("score").unwrap().unwrap();
        assert_eq!(
            scores.to_vec(),
            vec![DataValue::Float(1.5), DataValue::Null, DataValue::Float(2.5)]
        );

        let names = batch.column_values("name").unwrap().unwrap();
        assert_eq!(names[2], DataValue::Null);
        assert_eq!(names[0], DataValue::String("a".to_string()));
    }

    #[test]
    fn test_timestamp_conversion() {
        let array = TimestampMillisecondArray::from(vec![Some(1_700_000_000_000), None]);
        let values = array_to_values("ts", &array).unwrap();
        let expected = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(values, vec![DataValue::Timestamp(expected), DataValue::Null]);
    }

    #[test]
    fn test_type_mapping() {
        assert_eq!(arrow_type_to_dtype(&DataType::UInt16), DType::Int64);
        assert_eq!(arrow_type_to_dtype(&DataType::LargeUtf8), DType::String);
        assert_eq!(arrow_type_to_dtype(&DataType::Date32), DType::Timestamp);
        assert_eq!(arrow_type_to_dtype(&DataType::Binary), DType::Object);
        assert_eq!(
            arrow_type_to_dtype(&DataType::Decimal128(10, 2)),
            DType::Float64
        );
        assert_eq!(
            arrow_type_to_dtype(&DataType::Dictionary(
                Box::new(DataType::Int32),
                Box::new(DataType::Utf8)
            )),
            DType::String
        );
    }

    #[test]
    fn test_dictionary_decoded_through_values() {
        let array: DictionaryArray<Int32Type> =
            vec![Some("banned"), Some("active"), None, Some("banned")]
                .into_iter()
                .collect();

        let values = array_to_values("status", &array).unwrap();
        assert_eq!(
            values,
            vec![
                DataValue::from("banned"),
                DataValue::from("active"),
                DataValue::Null,
                DataValue::from("banned"),
            ]
        );
    }

    #[test]
    fn test_decimal_scaled_to_float() {
        let array = Decimal128Array::from(vec![Some(12_345), None, Some(-50)])
            .with_precision_and_scale(10, 2)
            .unwrap();

        let values = array_to_values("price", &array).unwrap();
        assert_eq!(
            values,
            vec![
                DataValue::Float(123.45),
                DataValue::Null,
                DataValue::Float(-0.5)
            ]
        );
    }

    #[test]
    fn test_unsupported_type_is_error_not_nulls() {
        let schema = Arc::new(Schema::new(vec![Field::new(
            "payload",
            DataType::Binary,
            false,
        )]));
        let array: ArrayRef = Arc::new(BinaryArray::from(vec![b"ab".as_ref(), b"cd".as_ref()]));
        let batch = RecordBatch::try_new(schema, vec![array]).unwrap();

        let err = batch.column_values("payload").unwrap().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnsupportedColumnType {
                column: "payload".to_string(),
                data_type: "Binary".to_string(),
            }
        );
    }
}

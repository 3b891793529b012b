//! Behavioural tests for the expectation checks over in-memory data frames.
//!
//! These exercise the properties every check must hold regardless of column
//! order, extra columns, or where a null lands in a column.

use expectations_core::{Column, DType, DataFrame, DataValue};
use expectations_validator::{Diagnostic, Expect, ExpectationError, ExpectationSet};
use pretty_assertions::assert_eq;

fn ab_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::from_values("A", [1i64, 2, 3]),
        Column::from_values("B", [4i64, 5, 6]),
    ])
    .unwrap()
}

#[test]
fn test_reference_scenario() {
    let frame = ab_frame();
    let expect = ExpectationSet::from_existing(&frame);

    assert!(expect.has_columns(&["A", "B"]).passed());

    let outcome = expect.has_columns(&["A", "C"]);
    assert!(!outcome.passed());
    assert_eq!(outcome.diagnostics().len(), 1);
    assert_eq!(outcome.diagnostics()[0].column(), Some("C"));
    assert!(outcome.diagnostics()[0].to_string().contains("'C'"));

    assert!(expect.columns_equal(&["B", "A"]).passed());
    assert!(expect.mean_between("A", 1.0, 3.0).unwrap().passed());
    assert!(!expect.mean_between("A", 5.0, 10.0).unwrap().passed());
}

#[test]
fn test_has_columns_ignores_order_and_extra_columns() {
    let frame = DataFrame::new(vec![
        Column::from_values("z", [0i64]),
        Column::from_values("A", [1i64]),
        Column::from_values("B", [2i64]),
    ])
    .unwrap();
    let expect = frame.expectations();

    assert!(expect.has_columns(&["B", "A"]).passed());
    assert!(expect.has_columns(&["A", "B", "z"]).passed());
    assert!(!expect.has_columns(&["A", "B", "y"]).passed());
}

#[test]
fn test_columns_equal_is_set_equality() {
    let frame = ab_frame();
    let expect = frame.expectations();

    assert!(expect.columns_equal(&["A", "B"]).passed());
    assert!(expect.columns_equal(&["B", "A"]).passed());
    assert!(!expect.columns_equal(&["A"]).passed());
    assert!(!expect.columns_equal(&["A", "B", "C"]).passed());
    assert!(!expect.columns_equal::<&str>(&[]).passed());
}

#[test]
fn test_schema_equal_unaffected_by_unlisted_mismatch() {
    let mut frame = ab_frame();
    let schema = [("A", DType::Int64), ("B", DType::Int64)];
    assert!(frame.expectations().schema_equal(schema).unwrap().passed());

    frame
        .insert_column(Column::from_values("label", ["x", "y", "z"]))
        .unwrap();
    assert!(frame.expectations().schema_equal(schema).unwrap().passed());

    let outcome = frame
        .expectations()
        .schema_equal([("label", DType::Float64)])
        .unwrap();
    assert_eq!(
        outcome.diagnostics(),
        &[Diagnostic::DTypeMismatch {
            column: "label".to_string(),
            actual: DType::String,
            expected: DType::Float64,
        }]
    );
}

#[test]
fn test_column_not_null_flips_for_any_null_position() {
    for row in 0..3 {
        let mut frame = ab_frame();
        assert!(frame.expectations().column_not_null("A").unwrap().passed());

        frame.set(row, "A", DataValue::Null).unwrap();
        let outcome = frame.expectations().column_not_null("A").unwrap();
        assert!(!outcome.passed(), "null at row {} not detected", row);
        assert_eq!(
            outcome.diagnostics(),
            &[Diagnostic::NullValues {
                column: "A".to_string(),
                count: 1,
                first_row: row,
            }]
        );
    }
}

#[test]
fn test_membership_checks_agree() {
    let frame = DataFrame::new(vec![Column::from_values(
        "color",
        ["red", "green", "red", "blue"],
    )])
    .unwrap();
    let expect = frame.expectations();

    let candidates: [&[&str]; 4] = [
        &["red", "green", "blue"],
        &["red", "green", "blue", "black"],
        &["red"],
        &[],
    ];

    for set in candidates {
        let in_set = expect.values_in_set("color", set.iter().copied()).unwrap();
        let subset = expect
            .values_subset_of("color", set.iter().copied())
            .unwrap();
        assert_eq!(in_set.passed(), subset.passed());
        assert_eq!(in_set.diagnostics(), subset.diagnostics());
    }
}

#[test]
fn test_values_in_set_and_not_in_set() {
    let frame = DataFrame::new(vec![Column::from_values(
        "color",
        ["red", "green", "red"],
    )])
    .unwrap();
    let expect = frame.expectations();

    assert!(expect.values_in_set("color", ["red", "green"]).unwrap().passed());
    assert!(!expect.values_in_set("color", ["red"]).unwrap().passed());

    assert!(expect.values_not_in_set("color", ["blue"]).unwrap().passed());
    assert!(expect.values_not_in_set::<&str>("color", []).unwrap().passed());
    assert!(!expect.values_not_in_set("color", ["green"]).unwrap().passed());
}

#[test]
fn test_mean_between_boundaries() {
    let frame = ab_frame();
    let expect = frame.expectations();
    let eps = 1e-9;

    // mean(A) == 2.0
    assert!(expect.mean_between("A", 2.0, 3.0).unwrap().passed());
    assert!(expect.mean_between("A", 1.0, 2.0).unwrap().passed());
    assert!(!expect.mean_between("A", 2.0 + eps, 3.0).unwrap().passed());
    assert!(!expect.mean_between("A", 1.0, 2.0 - eps).unwrap().passed());
}

#[test]
fn test_missing_column_is_error_not_false() {
    let frame = ab_frame();
    let expect = frame.expectations();

    let errors = [
        expect.column_not_null("C").unwrap_err(),
        expect.values_in_set("C", [1i64]).unwrap_err(),
        expect.values_subset_of("C", [1i64]).unwrap_err(),
        expect.values_not_in_set("C", [1i64]).unwrap_err(),
        expect.mean_between("C", 0.0, 1.0).unwrap_err(),
        expect.schema_equal([("C", DType::Int64)]).unwrap_err(),
    ];

    for err in errors {
        assert_eq!(
            err,
            ExpectationError::ColumnNotFound {
                column: "C".to_string(),
                available: vec!["A".to_string(), "B".to_string()],
            }
        );
    }
}

#[test]
fn test_checks_do_not_mutate_dataset() {
    let frame = ab_frame();
    let before = frame.clone();
    let expect = frame.expectations();

    let _ = expect.has_columns(&["A"]);
    let _ = expect.columns_equal(&["A"]);
    let _ = expect.values_in_set("A", [1i64]);
    let _ = expect.mean_between("A", 0.0, 1.0);

    assert_eq!(frame, before);
}

#[test]
fn test_native_operations_through_deref() {
    let frame = ab_frame();
    let expect = frame.expectations();

    assert_eq!(expect.height(), 3);
    assert_eq!(expect.column_names(), vec!["A", "B"]);
    assert_eq!(expect.get(1, "B"), Some(&DataValue::Int(5)));
}

#[cfg(feature = "arrow")]
mod arrow {
    use super::*;
    use arrow_array::types::Int32Type;
    use arrow_array::{
        BinaryArray, DictionaryArray, Float64Array, Int64Array, RecordBatch, StringArray,
    };
    use arrow_schema::{DataType, Field, Schema};
    use expectations_core::{CoreError, TabularData};
    use std::sync::Arc;

    fn batch() -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("price", DataType::Float64, true),
            Field::new("status", DataType::Utf8, true),
        ]));
        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int64Array::from(vec![1, 2, 3])),
                Arc::new(Float64Array::from(vec![Some(10.0), None, Some(20.0)])),
                Arc::new(StringArray::from(vec!["a", "b", "a"])),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_checks_over_record_batch() {
        let batch = batch();
        let expect = batch.expectations();

        assert!(expect.columns_equal(&["status", "price", "id"]).passed());
        assert!(
            expect
                .schema_equal([("id", DType::Int64), ("price", DType::Float64)])
                .unwrap()
                .passed()
        );
        assert!(!expect.column_not_null("price").unwrap().passed());
        assert!(expect.mean_between("price", 15.0, 15.0).unwrap().passed());
        assert!(expect.values_in_set("status", ["a", "b"]).unwrap().passed());
    }

    #[test]
    fn test_dictionary_column_reads_real_values() {
        let status: DictionaryArray<Int32Type> = vec!["banned", "active"].into_iter().collect();
        let schema = Arc::new(Schema::new(vec![Field::new(
            "status",
            DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::Utf8)),
            true,
        )]));
        let batch = RecordBatch::try_new(schema, vec![Arc::new(status)]).unwrap();
        let expect = batch.expectations();

        assert_eq!(batch.column_dtype("status"), Some(DType::String));
        assert!(expect.column_not_null("status").unwrap().passed());
        assert!(expect.values_in_set("status", ["banned", "active"]).unwrap().passed());

        let outcome = expect.values_not_in_set("status", ["banned"]).unwrap();
        assert!(!outcome.passed());
        assert_eq!(
            outcome.diagnostics(),
            &[Diagnostic::ValueForbidden {
                column: "status".to_string(),
                value: DataValue::from("banned"),
            }]
        );
    }

    #[test]
    fn test_unreadable_column_is_error_not_nulls() {
        let schema = Arc::new(Schema::new(vec![Field::new(
            "payload",
            DataType::Binary,
            false,
        )]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(BinaryArray::from(vec![b"x".as_ref(), b"y".as_ref()]))],
        )
        .unwrap();
        let expect = batch.expectations();

        let err = expect.column_not_null("payload").unwrap_err();
        assert_eq!(
            err,
            ExpectationError::Storage(CoreError::UnsupportedColumnType {
                column: "payload".to_string(),
                data_type: "Binary".to_string(),
            })
        );
        assert!(expect.values_not_in_set("payload", ["x"]).is_err());
    }
}

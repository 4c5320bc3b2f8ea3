//! Tests for the record module

use super::*;
use crate::error::Error;
use crate::schema::{EnumTable, FieldDescriptor, RecordSchema};
use crate::types::{FieldType, Value};
use std::sync::Arc;

fn task_schema() -> Arc<RecordSchema> {
    RecordSchema::new(
        "Task",
        vec![
            FieldDescriptor::required("tool_id", FieldType::Text),
            FieldDescriptor::required("nproc", FieldType::Int).with_default(1),
            FieldDescriptor::required("is_distributed", FieldType::Boolean).with_default(false),
            FieldDescriptor::required("input_files", FieldType::array(FieldType::Text))
                .with_default(Value::Array(vec![])),
        ],
    )
    .unwrap()
}

#[test]
fn build_fills_unset_fields_with_schema_defaults() {
    let schema = task_schema();
    let mut builder = RecordBuilder::new(Arc::clone(&schema));
    builder.set_named("tool_id", "pbalign").unwrap();

    let record = builder.build().unwrap();
    assert_eq!(record.get_named("tool_id").unwrap(), &Value::Text("pbalign".into()));
    assert_eq!(record.get_named("nproc").unwrap(), &Value::Int(1));
    assert_eq!(record.get_named("is_distributed").unwrap(), &Value::Boolean(false));
    assert_eq!(record.get_named("input_files").unwrap(), &Value::Array(vec![]));
}

#[test]
fn build_without_required_field_fails_citing_first_offender() {
    let schema = RecordSchema::new(
        "TwoRequired",
        vec![
            FieldDescriptor::required("a", FieldType::Int),
            FieldDescriptor::required("b", FieldType::Int).with_default(5),
            FieldDescriptor::required("c", FieldType::Int),
        ],
    )
    .unwrap();

    let builder = RecordBuilder::new(schema);
    let err = builder.build().unwrap_err();
    match err {
        Error::BuildFailed { field, source, .. } => {
            assert_eq!(field, "a");
            assert!(matches!(*source, Error::NoDefaultDeclared { .. }));
        }
        other => panic!("expected BuildFailed, got {other:?}"),
    }
}

#[test]
fn build_with_only_required_no_default_field_set_uses_default_for_rest() {
    let schema = RecordSchema::new(
        "Pair",
        vec![
            FieldDescriptor::required("a", FieldType::Int),
            FieldDescriptor::required("b", FieldType::Int).with_default(5),
        ],
    )
    .unwrap();

    let mut builder = RecordBuilder::new(schema);
    builder.set_named("a", 10).unwrap();
    let record = builder.build().unwrap();
    assert_eq!(record.get_named("b").unwrap(), &Value::Int(5));
}

#[test]
fn set_rejects_mismatched_value_type() {
    let schema = task_schema();
    let mut builder = RecordBuilder::new(schema);

    let err = builder.set_named("nproc", "eight").unwrap_err();
    match err {
        Error::InvalidFieldValue { field, expected, actual } => {
            assert_eq!(field, "nproc");
            assert_eq!(expected, "int");
            assert_eq!(actual, "text");
        }
        other => panic!("expected InvalidFieldValue, got {other:?}"),
    }
    assert!(!builder.has_named("nproc"));
}

#[test]
fn set_rejects_heterogeneous_array() {
    let schema = task_schema();
    let mut builder = RecordBuilder::new(schema);
    let err = builder
        .set_named(
            "input_files",
            Value::Array(vec![Value::Text("a.bam".into()), Value::Int(3)]),
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFieldValue { .. }));
}

#[test]
fn set_unknown_field_fails() {
    let schema = task_schema();
    let mut builder = RecordBuilder::new(schema);
    assert!(matches!(
        builder.set_named("no_such_field", 1).unwrap_err(),
        Error::UnknownField { .. }
    ));
    assert!(matches!(
        builder.set(99, 1).unwrap_err(),
        Error::UnknownField { .. }
    ));
}

#[test]
fn has_and_get_track_pending_state_not_defaults() {
    let schema = task_schema();
    let mut builder = RecordBuilder::new(Arc::clone(&schema));

    assert!(!builder.has_named("nproc"));
    assert_eq!(builder.get_named("nproc"), None);

    builder.set_named("nproc", 8).unwrap();
    assert!(builder.has_named("nproc"));
    assert_eq!(builder.get_named("nproc"), Some(&Value::Int(8)));

    builder.clear_named("nproc").unwrap();
    assert!(!builder.has_named("nproc"));
    assert_eq!(builder.get_named("nproc"), None);
}

#[test]
fn explicit_null_is_distinct_from_unset() {
    let schema = RecordSchema::new(
        "Opt",
        vec![FieldDescriptor::optional(
            "note",
            FieldType::union([FieldType::Null, FieldType::Text]),
        )],
    )
    .unwrap();

    let mut builder = RecordBuilder::new(schema);
    assert!(!builder.has(0));

    builder.set(0, Value::Null).unwrap();
    assert!(builder.has(0));
    assert_eq!(builder.get(0), Some(&Value::Null));
}

#[test]
fn chained_set_calls_return_builder() {
    let schema = task_schema();
    let mut builder = RecordBuilder::new(schema);
    builder
        .set_named("tool_id", "sawriter")
        .unwrap()
        .set_named("nproc", 4)
        .unwrap()
        .set_named("is_distributed", true)
        .unwrap();
    assert!(builder.has_named("tool_id"));
    assert!(builder.has_named("is_distributed"));
}

#[test]
fn cloned_builder_does_not_alias_pending_values() {
    let schema = task_schema();
    let mut b1 = RecordBuilder::new(schema);
    b1.set_named(
        "input_files",
        Value::Array(vec![Value::Text("movie.bax.h5".into())]),
    )
    .unwrap();

    let b2 = b1.clone();

    b1.set_named(
        "input_files",
        Value::Array(vec![Value::Text("other.bam".into())]),
    )
    .unwrap();

    assert_eq!(
        b2.get_named("input_files"),
        Some(&Value::Array(vec![Value::Text("movie.bax.h5".into())]))
    );
}

#[test]
fn copy_from_takes_set_fields_and_leaves_the_rest() {
    let schema = task_schema();
    let mut source = RecordBuilder::new(Arc::clone(&schema));
    source.set_named("nproc", 16).unwrap();

    let mut target = RecordBuilder::new(Arc::clone(&schema));
    target.set_named("tool_id", "blasr").unwrap();
    target.copy_from(&source);

    assert_eq!(target.get_named("nproc"), Some(&Value::Int(16)));
    assert_eq!(target.get_named("tool_id"), Some(&Value::Text("blasr".into())));
    assert!(!target.has_named("is_distributed"));
}

#[test]
fn copy_from_matches_fields_by_name_across_schemas() {
    let other = RecordSchema::new(
        "Other",
        vec![
            FieldDescriptor::required("nproc", FieldType::Int),
            FieldDescriptor::required("nproc_extra", FieldType::Int),
            // same name, incompatible type: must be skipped
            FieldDescriptor::required("tool_id", FieldType::Int),
        ],
    )
    .unwrap();

    let mut source = RecordBuilder::new(other);
    source.set_named("nproc", 2).unwrap();
    source.set_named("nproc_extra", 3).unwrap();
    source.set_named("tool_id", 7).unwrap();

    let mut target = RecordBuilder::new(task_schema());
    target.copy_from(&source);

    assert_eq!(target.get_named("nproc"), Some(&Value::Int(2)));
    assert!(!target.has_named("tool_id"));
}

#[test]
fn copy_from_record_seeds_every_field() {
    let schema = task_schema();
    let mut builder = RecordBuilder::new(Arc::clone(&schema));
    builder.set_named("tool_id", "pbalign").unwrap();
    let record = builder.build().unwrap();

    let mut seeded = RecordBuilder::for_record(&record);
    assert!(seeded.has_named("tool_id"));
    assert!(seeded.has_named("nproc"));

    seeded.set_named("nproc", 32).unwrap();
    let next = seeded.build().unwrap();
    assert_eq!(next.get_named("nproc").unwrap(), &Value::Int(32));
    // the source record is untouched
    assert_eq!(record.get_named("nproc").unwrap(), &Value::Int(1));
}

#[test]
fn builder_is_reusable_after_build() {
    let schema = task_schema();
    let mut builder = RecordBuilder::new(schema);
    builder.set_named("tool_id", "first").unwrap();

    let r1 = builder.build().unwrap();
    let r2 = builder.build().unwrap();
    assert_eq!(r1, r2);

    builder.set_named("tool_id", "second").unwrap();
    let r3 = builder.build().unwrap();
    assert_ne!(r1, r3);
    assert_eq!(r1.get_named("tool_id").unwrap(), &Value::Text("first".into()));
}

#[test]
fn repeated_builds_yield_independently_owned_records() {
    let schema = task_schema();
    let mut builder = RecordBuilder::new(schema);
    builder.set_named("tool_id", "pbalign").unwrap();

    let r1 = builder.build().unwrap();
    let r2 = builder.build().unwrap();

    let t1 = r1.get_named("tool_id").unwrap().as_text().unwrap();
    let t2 = r2.get_named("tool_id").unwrap().as_text().unwrap();
    assert_eq!(t1, t2);
    assert!(!std::ptr::eq(t1.as_ptr(), t2.as_ptr()));
}

#[test]
fn reset_returns_every_field_to_unset() {
    let schema = task_schema();
    let mut builder = RecordBuilder::new(schema);
    builder.set_named("tool_id", "x").unwrap();
    builder.set_named("nproc", 2).unwrap();

    builder.reset();
    assert!(!builder.has_named("tool_id"));
    assert!(!builder.has_named("nproc"));
}

#[test]
fn record_get_by_index_and_name_agree() {
    let schema = task_schema();
    let mut builder = RecordBuilder::new(schema);
    builder.set_named("tool_id", "blasr").unwrap();
    let record = builder.build().unwrap();

    assert_eq!(record.get(0).unwrap(), record.get_named("tool_id").unwrap());
    assert!(matches!(
        record.get(42).unwrap_err(),
        Error::UnknownField { .. }
    ));
    assert!(matches!(
        record.get_named("bogus").unwrap_err(),
        Error::UnknownField { .. }
    ));
}

#[test]
fn records_compare_structurally() {
    let schema = task_schema();

    let mut b1 = RecordBuilder::new(Arc::clone(&schema));
    b1.set_named("tool_id", "blasr").unwrap();
    let mut b2 = RecordBuilder::new(Arc::clone(&schema));
    b2.set_named("tool_id", "blasr").unwrap();

    assert_eq!(b1.build().unwrap(), b2.build().unwrap());

    b2.set_named("nproc", 2).unwrap();
    assert_ne!(b1.build().unwrap(), b2.build().unwrap());
}

#[test]
fn nested_record_values_are_validated_against_their_schema() {
    let driver = RecordSchema::new(
        "Driver",
        vec![FieldDescriptor::required("exe", FieldType::Text)],
    )
    .unwrap();
    let contract = RecordSchema::new(
        "Contract",
        vec![FieldDescriptor::required(
            "driver",
            FieldType::Record(Arc::clone(&driver)),
        )],
    )
    .unwrap();

    let mut driver_builder = RecordBuilder::new(driver);
    driver_builder.set_named("exe", "python -m runner").unwrap();
    let driver_record = driver_builder.build().unwrap();

    let mut builder = RecordBuilder::new(contract);
    builder.set_named("driver", driver_record).unwrap();
    let record = builder.build().unwrap();

    let nested = record.get_named("driver").unwrap().as_record().unwrap();
    assert_eq!(
        nested.get_named("exe").unwrap(),
        &Value::Text("python -m runner".into())
    );
}

#[test]
fn union_field_accepts_each_declared_alternative() {
    let schema = RecordSchema::new(
        "Options",
        vec![FieldDescriptor::required(
            "value",
            FieldType::union([
                FieldType::Int,
                FieldType::Boolean,
                FieldType::Text,
            ]),
        )],
    )
    .unwrap();

    let mut builder = RecordBuilder::new(schema);
    builder.set(0, 42).unwrap();
    builder.set(0, true).unwrap();
    builder.set(0, "fast").unwrap();
    assert!(matches!(
        builder.set(0, Value::Null).unwrap_err(),
        Error::InvalidFieldValue { .. }
    ));
}

#[test]
fn enum_field_rejects_value_from_other_table() {
    let reagents = EnumTable::new("ReagentKey", [("BASE", "Base"), ("TSQ", "TSQ")]).unwrap();
    let stages = EnumTable::new("Stage", [("PRIMARY", "Primary")]).unwrap();

    let schema = RecordSchema::new(
        "Mix",
        vec![FieldDescriptor::required(
            "reagent",
            FieldType::Enum(Arc::clone(&reagents)),
        )],
    )
    .unwrap();

    let mut builder = RecordBuilder::new(schema);
    builder
        .set(0, reagents.from_canonical("TSQ").unwrap())
        .unwrap();
    assert!(matches!(
        builder
            .set(0, stages.from_canonical("Primary").unwrap())
            .unwrap_err(),
        Error::InvalidFieldValue { .. }
    ));
}

#[test]
fn record_display_renders_name_and_fields() {
    let schema = RecordSchema::new(
        "Driver",
        vec![FieldDescriptor::required("exe", FieldType::Text)],
    )
    .unwrap();
    let mut builder = RecordBuilder::new(schema);
    builder.set_named("exe", "blasr").unwrap();
    let record = builder.build().unwrap();
    assert_eq!(record.to_string(), r#"Driver { exe: "blasr" }"#);
}

//! Unit tests for field definitions and runtime values.

use crate::model::{FieldDef, FieldKind, FieldValue};
use rstest::rstest;

// ============================================================================
// FieldDef tests
// ============================================================================

#[rstest]
fn serial_fields_are_not_nullable() {
    let def = FieldDef::new("id", FieldKind::Serial);
    assert!(!def.nullable());
    assert_eq!(def.kind(), FieldKind::Serial);
}

#[rstest]
#[case(FieldKind::Integer)]
#[case(FieldKind::Text)]
fn non_serial_fields_are_nullable(#[case] kind: FieldKind) {
    assert!(FieldDef::new("field", kind).nullable());
}

#[rstest]
fn integer_field_accepts_integer_and_null() {
    let def = FieldDef::new("created_by", FieldKind::Integer);
    assert!(def.accepts(&FieldValue::Integer(99)));
    assert!(def.accepts(&FieldValue::Null));
    assert!(!def.accepts(&FieldValue::text("99")));
}

#[rstest]
fn serial_field_accepts_explicit_integer_but_not_null() {
    let def = FieldDef::new("id", FieldKind::Serial);
    assert!(def.accepts(&FieldValue::Integer(1)));
    assert!(!def.accepts(&FieldValue::Null));
}

#[rstest]
fn text_field_rejects_integer() {
    let def = FieldDef::new("title", FieldKind::Text);
    assert!(def.accepts(&FieldValue::text("hello")));
    assert!(!def.accepts(&FieldValue::Integer(1)));
}

// ============================================================================
// FieldValue tests
// ============================================================================

#[rstest]
fn null_value_reports_null() {
    assert!(FieldValue::Null.is_null());
    assert_eq!(FieldValue::Null.as_integer(), None);
    assert_eq!(FieldValue::Null.as_text(), None);
}

#[rstest]
fn integer_value_accessors() {
    let value = FieldValue::integer(42);
    assert!(!value.is_null());
    assert_eq!(value.as_integer(), Some(42));
    assert_eq!(value.as_text(), None);
}

#[rstest]
fn text_value_accessors() {
    let value = FieldValue::text("Joe");
    assert_eq!(value.as_text(), Some("Joe"));
    assert_eq!(value.as_integer(), None);
}

#[rstest]
#[case(FieldValue::Null, "null")]
#[case(FieldValue::Integer(1), "integer")]
#[case(FieldValue::text("x"), "text")]
fn kind_labels_match_variant(#[case] value: FieldValue, #[case] label: &str) {
    assert_eq!(value.kind_label(), label);
}

//! Unit tests for the declaration builder.

use crate::model::{EntityDeclaration, FieldKind, FieldName};
use crate::stamping::domain::{StampArg, StampArgs};
use rstest::rstest;

#[rstest]
fn builder_collects_fields_in_order() {
    let decl = EntityDeclaration::named("User")
        .field("id", FieldKind::Serial)
        .field("name", FieldKind::Text);
    assert_eq!(decl.name().as_str(), "User");
    let names: Vec<&FieldName> = decl.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, [&FieldName::new("id"), &FieldName::new("name")]);
}

#[rstest]
fn plain_declaration_has_no_actionstamps_roles() {
    let decl = EntityDeclaration::named("Widget").field("id", FieldKind::Serial);
    assert!(!decl.is_actor_provider());
    assert!(decl.stamp_request().is_none());
}

#[rstest]
fn provides_actionstamps_marks_provider() {
    let decl = EntityDeclaration::named("User")
        .field("id", FieldKind::Serial)
        .provides_actionstamps();
    assert!(decl.is_actor_provider());
}

#[rstest]
fn actionstamps_records_the_requested_arguments() {
    let args = StampArgs::new(StampArg::token("by_id"), StampArg::type_ref("Author"));
    let decl = EntityDeclaration::named("Article")
        .field("id", FieldKind::Serial)
        .actionstamps(args.clone());
    assert_eq!(decl.stamp_request(), Some(&args));
}

//! Unit tests for stamp-binding configuration.
//!
//! Covers the declaration-time algorithm: defaulting, argument-shape
//! rejection, actor type resolution, the field-collision check, and the
//! produced stamp-fields fragment.

use super::FixedResolver;
use crate::model::{EntityTypeName, FieldDef, FieldKind, FieldName};
use crate::stamping::domain::{ArgShape, StampArg, StampArgs, StampBinding};
use crate::stamping::error::ConfigError;
use rstest::rstest;

fn article_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("id", FieldKind::Serial),
        FieldDef::new("title", FieldKind::Text),
    ]
}

fn configure(args: StampArgs, resolver: &FixedResolver) -> Result<StampBinding, ConfigError> {
    StampBinding::configure(
        &EntityTypeName::new("Article"),
        &article_fields(),
        &args,
        resolver,
    )
}

// ============================================================================
// Successful configuration
// ============================================================================

#[rstest]
fn default_args_bind_created_by_and_updated_by_to_user() {
    let resolver = FixedResolver::with(&["User"]);
    let binding = configure(StampArgs::default(), &resolver).expect("valid configuration");

    assert_eq!(binding.actor_type(), &EntityTypeName::new("User"));
    assert_eq!(binding.suffix().as_str(), "by");
    assert_eq!(binding.created_field(), &FieldName::new("created_by"));
    assert_eq!(binding.updated_field(), &FieldName::new("updated_by"));
}

#[rstest]
fn custom_suffix_derives_both_field_names() {
    let resolver = FixedResolver::with(&["Author"]);
    let args = StampArgs::new(StampArg::token("by_id"), StampArg::type_ref("Author"));
    let binding = configure(args, &resolver).expect("valid configuration");

    assert_eq!(binding.created_field(), &FieldName::new("created_by_id"));
    assert_eq!(binding.updated_field(), &FieldName::new("updated_by_id"));
}

#[rstest]
fn stamp_fields_fragment_is_two_nullable_integers() {
    let resolver = FixedResolver::with(&["User"]);
    let binding = configure(StampArgs::default(), &resolver).expect("valid configuration");

    let [created, updated] = binding.stamp_fields();
    assert_eq!(created.name(), &FieldName::new("created_by"));
    assert_eq!(updated.name(), &FieldName::new("updated_by"));
    for field in [&created, &updated] {
        assert_eq!(field.kind(), FieldKind::Integer);
        assert!(field.nullable());
    }
}

// ============================================================================
// Argument-shape errors (invalid-argument class)
// ============================================================================

#[rstest]
fn associative_suffix_argument_is_rejected() {
    let resolver = FixedResolver::with(&["User"]);
    let args = StampArgs::new(
        StampArg::map([(String::from("model"), String::from("user"))]),
        StampArg::type_ref("User"),
    );
    let err = configure(args, &resolver).expect_err("shape error");
    assert_eq!(err, ConfigError::SuffixNotToken { found: ArgShape::Map });
}

#[rstest]
#[case(StampArg::map([(String::from("model"), String::from("user"))]), ArgShape::Map)]
#[case(StampArg::token("user"), ArgShape::Token)]
#[case(StampArg::text("User"), ArgShape::Text)]
fn non_type_actor_arguments_are_rejected(#[case] actor: StampArg, #[case] shape: ArgShape) {
    let resolver = FixedResolver::with(&["User"]);
    let args = StampArgs::new(StampArg::token("by"), actor);
    let err = configure(args, &resolver).expect_err("shape error");
    assert_eq!(err, ConfigError::ActorTypeNotModel { found: shape });
}

#[rstest]
fn malformed_suffix_token_is_rejected_before_resolution() {
    let resolver = FixedResolver::with(&[]);
    let args = StampArgs::new(StampArg::token("no spaces"), StampArg::type_ref("User"));
    let err = configure(args, &resolver).expect_err("shape error");
    assert_eq!(err, ConfigError::MalformedSuffix(String::from("no spaces")));
}

// ============================================================================
// Name-resolution errors (distinct from shape errors)
// ============================================================================

#[rstest]
fn unresolved_actor_type_is_a_name_error() {
    let resolver = FixedResolver::with(&["User"]);
    let args = StampArgs::new(StampArg::token("by"), StampArg::type_ref("DoesNotExist"));
    let err = configure(args, &resolver).expect_err("name error");
    assert_eq!(
        err,
        ConfigError::UnknownActorModel(EntityTypeName::new("DoesNotExist")),
    );
}

// ============================================================================
// Field-collision errors
// ============================================================================

#[rstest]
#[case("created_by_id")]
#[case("updated_by_id")]
fn pre_declared_stamp_field_is_rejected(#[case] existing: &str) {
    let resolver = FixedResolver::with(&["Author"]);
    let mut fields = article_fields();
    fields.push(FieldDef::new(existing, FieldKind::Integer));
    let args = StampArgs::new(StampArg::token("by_id"), StampArg::type_ref("Author"));

    let err = StampBinding::configure(&EntityTypeName::new("Post"), &fields, &args, &resolver)
        .expect_err("collision error");
    assert_eq!(
        err,
        ConfigError::StampFieldCollision {
            type_name: EntityTypeName::new("Post"),
            field: FieldName::new(existing),
        },
    );
}

#[rstest]
fn same_suffix_on_unrelated_fields_does_not_collide() {
    let resolver = FixedResolver::with(&["User"]);
    let mut fields = article_fields();
    // `created_by_id` does not collide with the `by` suffix's `created_by`.
    fields.push(FieldDef::new("created_by_id", FieldKind::Integer));

    let binding =
        StampBinding::configure(
            &EntityTypeName::new("Article"),
            &fields,
            &StampArgs::default(),
            &resolver,
        )
        .expect("no collision");
    assert_eq!(binding.created_field(), &FieldName::new("created_by"));
}

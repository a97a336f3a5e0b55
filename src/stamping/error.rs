//! Configuration errors of the stamp binder.
//!
//! All variants are raised synchronously at declaration time; stamping
//! itself never fails. The taxonomy keeps the shape class (how an argument
//! was written) distinct from the name-resolution class (whether the actor
//! type exists) and the collision class (pre-declared stamp fields).

use super::domain::ArgShape;
use crate::model::{EntityTypeName, FieldName};
use thiserror::Error;

/// Errors raised while configuring stamp binding on a receiving type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The suffix argument was not a bare token. Guards against the
    /// single-associative-argument misuse (`actionstamps model => user`).
    #[error(
        "invalid suffix argument: expected a bare token such as `by`, got {found}; \
         syntax: actionstamps(<suffix>, <ModelType>)"
    )]
    SuffixNotToken {
        /// The shape that was actually passed.
        found: ArgShape,
    },

    /// The suffix token itself was not a simple name token.
    #[error("malformed suffix token `{0}`: expected a simple name such as `by` or `by_id`")]
    MalformedSuffix(String),

    /// The actor type argument was not a model type reference. Guards
    /// against passing a bare name or a text string where a resolved type
    /// was required (`actionstamps by, "User"`).
    #[error(
        "invalid actor type argument: expected a model type reference, got {found}; \
         syntax: actionstamps(<suffix>, <ModelType>)"
    )]
    ActorTypeNotModel {
        /// The shape that was actually passed.
        found: ArgShape,
    },

    /// The actor type does not name a declared model type.
    #[error("unknown actor model `{0}`: the actor type must name a declared entity type")]
    UnknownActorModel(EntityTypeName),

    /// The receiving type already declares one of the stamp fields. The
    /// binder owns these fields and declares them itself.
    #[error(
        "field `{field}` is already declared on `{type_name}`: do not pre-declare the \
         created_<suffix> / updated_<suffix> fields, they are declared by the stamp binder"
    )]
    StampFieldCollision {
        /// The receiving entity type.
        type_name: EntityTypeName,
        /// The colliding field name.
        field: FieldName,
    },
}

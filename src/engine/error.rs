//! Error types of the in-memory engine.

use crate::model::{EntityTypeName, FieldKind, FieldName, SchemaError};
use crate::stamping::error::ConfigError;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while registering an entity declaration.
#[derive(Debug, Clone, Error)]
pub enum DeclareError {
    /// A type with this name is already registered.
    #[error("entity type `{0}` is already declared")]
    DuplicateType(EntityTypeName),

    /// The declared field list failed schema assembly.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The stamp-binding request was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The engine's shared state was unavailable.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

/// Errors raised by record and save operations.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The entity type is not registered.
    #[error("unknown entity type: {0}")]
    UnknownType(EntityTypeName),

    /// The field is not declared on the record's type.
    #[error("unknown field `{field}` on entity type `{type_name}`")]
    UnknownField {
        /// The record's entity type.
        type_name: EntityTypeName,
        /// The undeclared field name.
        field: FieldName,
    },

    /// The value's kind does not match the field's declared kind.
    #[error("cannot store {found} value in {expected} field `{field}`")]
    KindMismatch {
        /// The target field.
        field: FieldName,
        /// The field's declared kind.
        expected: FieldKind,
        /// The offered value's kind.
        found: &'static str,
    },

    /// The engine's shared state was unavailable.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EngineError {
    /// Wraps a persistence-layer failure.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl DeclareError {
    /// Wraps a persistence-layer failure.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

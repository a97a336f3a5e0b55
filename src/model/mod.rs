//! Entity-model vocabulary shared by the actor registry, the stamp binder,
//! and the persistence engine.
//!
//! The types here describe *what an entity looks like*: identifier newtypes
//! ([`EntityTypeName`], [`FieldName`], [`ActorKey`]), field definitions and
//! runtime values ([`FieldDef`], [`FieldKind`], [`FieldValue`]), assembled
//! schemas ([`EntitySchema`]), and the declaration builder
//! ([`EntityDeclaration`]) application code uses to describe a type before
//! handing it to an engine.
//!
//! Nothing in this module performs I/O or touches thread state; it is pure
//! vocabulary.

mod declaration;
mod field;
mod ids;
mod schema;

pub use declaration::EntityDeclaration;
pub use field::{FieldDef, FieldKind, FieldValue};
pub use ids::{ActorKey, EntityTypeName, FieldName};
pub use schema::{EntitySchema, SchemaError};

#[cfg(test)]
mod tests;

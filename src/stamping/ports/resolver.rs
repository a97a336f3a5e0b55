//! Model-registry lookup port, used at configuration time.

use crate::model::EntityTypeName;

/// Resolves entity type names against the engine's model registry.
///
/// The binder uses this once, at declaration time, to verify that the
/// configured actor type names a type that actually exists.
pub trait TypeResolver {
    /// Returns `true` when `name` names a declared entity type.
    fn is_declared(&self, name: &EntityTypeName) -> bool;
}

//! Unit tests for the stamp binder.
//!
//! Configuration tests drive [`StampBinding::configure`] directly against a
//! fixed resolver; hook tests drive the stamping rules against a minimal
//! fake record, independent of any engine.
//!
//! [`StampBinding::configure`]: crate::stamping::domain::StampBinding::configure

mod config_tests;

use crate::model::EntityTypeName;
use crate::stamping::ports::TypeResolver;

/// Resolver backed by a fixed list of declared type names.
struct FixedResolver(Vec<EntityTypeName>);

impl FixedResolver {
    fn with(names: &[&str]) -> Self {
        Self(names.iter().copied().map(EntityTypeName::from).collect())
    }
}

impl TypeResolver for FixedResolver {
    fn is_declared(&self, name: &EntityTypeName) -> bool {
        self.0.contains(name)
    }
}

//! Identifier newtypes for entity types, fields, and actor primary keys.
//!
//! These types wrap plain strings and integers to prevent accidental mixing
//! of the different identifier kinds that flow through the stamping protocol.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of an entity type in the model registry (e.g. `User`, `Article`).
///
/// Actor-registry slots and stamp-binder configurations are keyed by this
/// identity; two names compare equal exactly when their text is equal.
///
/// # Examples
///
/// ```
/// use actionstamps::model::EntityTypeName;
///
/// let name = EntityTypeName::new("User");
/// assert_eq!(name.as_str(), "User");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityTypeName(String);

impl EntityTypeName {
    /// Creates an entity type name from any string-like value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for EntityTypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EntityTypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for EntityTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a field on an entity type (e.g. `title`, `created_by`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Creates a field name from any string-like value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primary-key value of an actor instance.
///
/// Stamp fields hold this value, not an embedded actor object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ActorKey(i64);

impl ActorKey {
    /// Creates an actor key from a raw integer value.
    #[must_use]
    pub const fn new(key: i64) -> Self {
        Self(key)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ActorKey {
    fn from(key: i64) -> Self {
        Self(key)
    }
}

impl fmt::Display for ActorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

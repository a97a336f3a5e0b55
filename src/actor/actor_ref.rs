//! Identity reference to an actor instance.

use crate::model::{ActorKey, EntityTypeName};
use serde::{Deserialize, Serialize};

/// Reference to an actor instance: its entity type plus its primary key.
///
/// This is what the registry stores in a slot. The persistence state of the
/// referenced instance is not validated — an unsaved actor (no primary key
/// yet) is representable and accepted; the stamping hook simply has no key
/// to write for it.
///
/// # Examples
///
/// ```
/// use actionstamps::actor::ActorRef;
/// use actionstamps::model::{ActorKey, EntityTypeName};
///
/// let saved = ActorRef::new(EntityTypeName::new("User"), Some(ActorKey::new(99)));
/// assert_eq!(saved.primary_key(), Some(ActorKey::new(99)));
///
/// let unsaved = ActorRef::unsaved(EntityTypeName::new("User"));
/// assert_eq!(unsaved.primary_key(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRef {
    type_name: EntityTypeName,
    primary_key: Option<ActorKey>,
}

impl ActorRef {
    /// Creates an actor reference for the given type and optional key.
    #[must_use]
    pub const fn new(type_name: EntityTypeName, primary_key: Option<ActorKey>) -> Self {
        Self {
            type_name,
            primary_key,
        }
    }

    /// Creates a reference to a not-yet-persisted actor of the given type.
    #[must_use]
    pub const fn unsaved(type_name: EntityTypeName) -> Self {
        Self {
            type_name,
            primary_key: None,
        }
    }

    /// Returns the actor's entity type name.
    #[must_use]
    pub const fn type_name(&self) -> &EntityTypeName {
        &self.type_name
    }

    /// Returns the actor's primary key, or `None` when it has not been
    /// persisted.
    #[must_use]
    pub const fn primary_key(&self) -> Option<ActorKey> {
        self.primary_key
    }
}

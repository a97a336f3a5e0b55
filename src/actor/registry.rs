//! The per-thread, per-type current-actor slot map.

use super::actor_ref::ActorRef;
use crate::model::EntityTypeName;
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static SLOTS: RefCell<HashMap<EntityTypeName, ActorRef>> = RefCell::new(HashMap::new());
}

/// Thread-scoped storage of the current actor, one independent slot per
/// actor-providing entity type.
///
/// Setting a slot replaces whatever it held; there is no stack or nesting.
/// Callers needing nested scopes should use [`super::ActorScope`], which
/// saves and restores explicitly.
///
/// # Examples
///
/// ```
/// use actionstamps::actor::{ActorRef, ActorRegistry};
/// use actionstamps::model::{ActorKey, EntityTypeName};
///
/// let user = EntityTypeName::new("User");
/// assert_eq!(ActorRegistry::current(&user), None);
///
/// ActorRegistry::set_current(ActorRef::new(user.clone(), Some(ActorKey::new(7))));
/// assert_eq!(
///     ActorRegistry::current(&user).and_then(|actor| actor.primary_key()),
///     Some(ActorKey::new(7)),
/// );
///
/// ActorRegistry::clear_current(&user);
/// assert_eq!(ActorRegistry::current(&user), None);
/// ```
#[derive(Debug)]
pub struct ActorRegistry;

impl ActorRegistry {
    /// Stores `actor` in the calling thread's slot for its type, replacing
    /// any previous value.
    ///
    /// The actor's persistence state is not validated; an unsaved instance
    /// is accepted.
    pub fn set_current(actor: ActorRef) {
        SLOTS.with(|slots| {
            slots
                .borrow_mut()
                .insert(actor.type_name().clone(), actor);
        });
    }

    /// Empties the calling thread's slot for the given type.
    pub fn clear_current(type_name: &EntityTypeName) {
        SLOTS.with(|slots| {
            slots.borrow_mut().remove(type_name);
        });
    }

    /// Returns the value last stored in the calling thread's slot for the
    /// given type, or `None` if never set (or since cleared) on this thread.
    #[must_use]
    pub fn current(type_name: &EntityTypeName) -> Option<ActorRef> {
        SLOTS.with(|slots| slots.borrow().get(type_name).cloned())
    }

    /// Empties every slot on the calling thread.
    ///
    /// Intended for unit-of-work boundaries on reused threads, where a
    /// lingering actor would leak into unrelated operations.
    pub fn clear_all() {
        SLOTS.with(|slots| {
            slots.borrow_mut().clear();
        });
    }
}

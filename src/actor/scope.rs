//! RAII guard for scoped current-actor values.

use super::actor_ref::ActorRef;
use super::registry::ActorRegistry;
use crate::model::EntityTypeName;

/// Guard that installs a current actor for the duration of a scope.
///
/// On entry the previous slot contents for the actor's type are saved and
/// the new actor installed; on drop the previous contents (a value or
/// absence) are restored. This gives guaranteed clearing at scope exit,
/// which the raw registry does not provide.
///
/// # Examples
///
/// ```
/// use actionstamps::actor::{ActorRef, ActorRegistry, ActorScope};
/// use actionstamps::model::{ActorKey, EntityTypeName};
///
/// let user = EntityTypeName::new("User");
/// {
///     let _scope = ActorScope::enter(ActorRef::new(user.clone(), Some(ActorKey::new(3))));
///     assert!(ActorRegistry::current(&user).is_some());
/// }
/// assert_eq!(ActorRegistry::current(&user), None);
/// ```
#[derive(Debug)]
pub struct ActorScope {
    type_name: EntityTypeName,
    previous: Option<ActorRef>,
}

impl ActorScope {
    /// Saves the current slot contents for `actor`'s type, then installs
    /// `actor` as current on the calling thread.
    #[must_use = "dropping the scope immediately restores the previous actor"]
    pub fn enter(actor: ActorRef) -> Self {
        let type_name = actor.type_name().clone();
        let previous = ActorRegistry::current(&type_name);
        ActorRegistry::set_current(actor);
        Self {
            type_name,
            previous,
        }
    }

    /// Returns the type whose slot this scope manages.
    #[must_use]
    pub const fn type_name(&self) -> &EntityTypeName {
        &self.type_name
    }
}

impl Drop for ActorScope {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(previous) => ActorRegistry::set_current(previous),
            None => ActorRegistry::clear_current(&self.type_name),
        }
    }
}

//! Unit tests for the RAII actor scope.

use crate::actor::{ActorRef, ActorRegistry, ActorScope};
use crate::model::{ActorKey, EntityTypeName};
use rstest::rstest;

fn actor(type_name: &EntityTypeName, key: i64) -> ActorRef {
    ActorRef::new(type_name.clone(), Some(ActorKey::new(key)))
}

#[rstest]
fn scope_installs_and_clears_when_slot_was_empty() {
    let user = EntityTypeName::new("ScopeEmptyUser");
    {
        let scope = ActorScope::enter(actor(&user, 1));
        assert_eq!(scope.type_name(), &user);
        assert_eq!(ActorRegistry::current(&user), Some(actor(&user, 1)));
    }
    assert_eq!(ActorRegistry::current(&user), None);
}

#[rstest]
fn scope_restores_previous_actor_on_drop() {
    let user = EntityTypeName::new("ScopeRestoreUser");
    ActorRegistry::set_current(actor(&user, 1));
    {
        let _scope = ActorScope::enter(actor(&user, 2));
        assert_eq!(ActorRegistry::current(&user), Some(actor(&user, 2)));
    }
    assert_eq!(ActorRegistry::current(&user), Some(actor(&user, 1)));
    ActorRegistry::clear_current(&user);
}

#[rstest]
fn nested_scopes_unwind_in_order() {
    let user = EntityTypeName::new("ScopeNestedUser");
    {
        let _outer = ActorScope::enter(actor(&user, 1));
        {
            let _inner = ActorScope::enter(actor(&user, 2));
            assert_eq!(ActorRegistry::current(&user), Some(actor(&user, 2)));
        }
        assert_eq!(ActorRegistry::current(&user), Some(actor(&user, 1)));
    }
    assert_eq!(ActorRegistry::current(&user), None);
}

#[rstest]
fn scope_only_touches_its_own_type() {
    let user = EntityTypeName::new("ScopeOwnUser");
    let client = EntityTypeName::new("ScopeOtherClient");
    ActorRegistry::set_current(actor(&client, 7));
    {
        let _scope = ActorScope::enter(actor(&user, 1));
    }
    assert_eq!(ActorRegistry::current(&client), Some(actor(&client, 7)));
    ActorRegistry::clear_current(&client);
}

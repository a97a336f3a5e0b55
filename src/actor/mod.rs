//! Thread-scoped current-actor storage.
//!
//! Application code records "who is acting" here before performing a
//! mutation; the stamp binder's pre-persist hook reads it back while a
//! record is being saved on the same thread. Storage is partitioned by
//! `(actor type, thread)`: a value set on one thread is never visible to
//! another, and each actor-providing type has an independent slot.
//!
//! The slots are ambient state and are never torn down automatically — a
//! value survives until explicitly cleared or the thread dies. On reused
//! threads (worker pools) this leaks an actor into unrelated work, so
//! callers must clear slots at unit-of-work boundaries, either directly via
//! [`ActorRegistry::clear_current`] / [`ActorRegistry::clear_all`] or with
//! the RAII guard [`ActorScope`], which restores the previous slot contents
//! on drop.

mod actor_ref;
mod registry;
mod scope;

pub use actor_ref::ActorRef;
pub use registry::ActorRegistry;
pub use scope::ActorScope;

#[cfg(test)]
mod tests;

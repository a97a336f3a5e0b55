//! Ports consumed from the surrounding persistence engine.
//!
//! The binder needs exactly two things from an engine: a way to resolve an
//! actor type name at configuration time ([`TypeResolver`]) and per-record
//! access to the persistence flags and stamp fields at hook time
//! ([`Stamped`]). Everything else — SQL, migrations, transactions — stays
//! on the engine's side of the boundary.

mod record;
mod resolver;

pub use record::Stamped;
pub use resolver::TypeResolver;

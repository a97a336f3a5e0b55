//! The stamp binder: configuration, validation, and the pre-persist hook.
//!
//! A receiving entity type is bound once, at declaration time, with a
//! `(suffix, actor type)` argument pair. Configuration derives the
//! `created_<suffix>` / `updated_<suffix>` field names, validates argument
//! shape, resolves the actor type against the model registry, checks for
//! field-name collisions, and produces a [`domain::StampBinding`] carrying
//! the stamp-fields fragment the engine composes into the schema.
//!
//! At save time the binding's hook reads the actor registry for the
//! configured type and conditionally writes the two fields onto the record
//! being persisted. Stamping never fails: an absent actor is a valid state
//! and leaves both fields untouched.
//!
//! The surrounding persistence engine is consumed through the narrow traits
//! in [`ports`]; the binder itself performs no I/O.

pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod tests;

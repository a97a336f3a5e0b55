//! In-memory persistence engine adapter.
//!
//! A complete, thread-safe engine implementing the collaborator contract
//! the stamp binder consumes: a model registry with declaration-time
//! binding, record instances with new-record and dirty flags, a save path
//! that runs the automatic pre-persist hook, and a `touch` operation that
//! re-stamps unconditionally. Used by the crate's own tests and as a
//! reference for adapting real engines.

mod error;
mod memory;
mod record;

pub use error::{DeclareError, EngineError};
pub use memory::InMemoryEngine;
pub use record::Record;

#[cfg(test)]
mod tests;

//! Unit tests for the entity-model vocabulary.
//!
//! Tests are organised by concept: identifier newtypes, field definitions
//! and values, schema assembly, and the declaration builder.

mod declaration_tests;
mod field_tests;

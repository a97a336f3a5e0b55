//! Unit tests for thread-scoped current-actor storage.
//!
//! Each test uses its own entity type names so the per-thread slots cannot
//! interfere across tests, whatever threading the test harness uses.

mod scope_tests;

//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The in-memory repository has to honour the same filter, ordering and
//!   not-found rules as the PostgreSQL adapter
//! - Manual mocks are more explicit and easier to debug

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The JSON repository already serves from memory, so it doubles as the
//! in-memory fake. Mocks here only cover failure paths.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

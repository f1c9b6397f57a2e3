//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mocks store data in memory behind `RwLock`s and keep insertion
//! order, so "newest first" is deterministic even when timestamps collide.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

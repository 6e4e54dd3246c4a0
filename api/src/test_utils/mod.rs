//! Test utilities
//!
//! Fixtures shared by unit tests. Repository doubles come from the in-memory
//! adapter or from the `MockTodoRepository` generated by mockall.

pub mod fixtures;

pub use fixtures::*;

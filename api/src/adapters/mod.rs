//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryTodoRepository;
pub use postgres::PostgresTodoRepository;

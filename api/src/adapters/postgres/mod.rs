//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod todo_repo;

#[cfg(test)]
mod integration_tests;

pub use todo_repo::PostgresTodoRepository;

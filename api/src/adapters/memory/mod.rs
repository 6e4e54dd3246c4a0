//! In-memory adapters
//!
//! Process-local implementations of repository traits. Data is lost on restart.

pub mod todo_repo;

pub use todo_repo::InMemoryTodoRepository;

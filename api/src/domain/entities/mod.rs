//! Domain entities

pub mod todo;

pub use todo::{NewTodo, Todo, TodoId};

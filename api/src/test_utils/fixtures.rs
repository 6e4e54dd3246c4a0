//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{NewTodo, Todo, TodoId};

/// Create a test todo matching `{id, "Test", completed, order 4}`
pub fn test_todo(id: i64) -> Todo {
    Todo {
        id: TodoId(id),
        title: "Test".to_string(),
        completed: true,
        order: 4,
    }
}

/// Create a todo payload with the given id and title
pub fn new_todo(id: Option<i64>, title: &str) -> NewTodo {
    NewTodo {
        id: id.map(TodoId),
        title: title.to_string(),
        completed: true,
        order: 4,
    }
}

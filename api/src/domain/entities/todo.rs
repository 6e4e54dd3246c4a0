//! Todo domain entity

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    /// Display/sort hint chosen by the client
    pub order: i64,
}

/// Data needed to store a todo
///
/// `id` is `None` when the repository should assign one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub id: Option<TodoId>,
    pub title: String,
    pub completed: bool,
    pub order: i64,
}

impl NewTodo {
    /// Materialize the todo under the given id
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: self.completed,
            order: self.order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_integer_id() {
        let todo = Todo {
            id: TodoId(3),
            title: "Test".to_string(),
            completed: true,
            order: 4,
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "title": "Test", "completed": true, "order": 4})
        );
    }

    #[test]
    fn todo_rejects_missing_fields() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"id": 3, "title": "Test"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn into_todo_uses_given_id() {
        let new = NewTodo {
            id: Some(TodoId(99)),
            title: "Walk dog".to_string(),
            completed: false,
            order: 1,
        };

        let todo = new.into_todo(TodoId(7));
        assert_eq!(todo.id, TodoId(7));
        assert_eq!(todo.title, "Walk dog");
        assert!(!todo.completed);
        assert_eq!(todo.order, 1);
    }

    #[test]
    fn todo_id_display() {
        assert_eq!(TodoId(42).to_string(), "42");
    }
}

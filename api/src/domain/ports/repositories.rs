//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (in-memory, PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewTodo, Todo, TodoId};
use crate::error::DomainError;

/// Repository for Todo entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// List every todo in store order
    async fn list_all(&self) -> Result<Vec<Todo>, DomainError>;

    /// Find a todo by ID
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, DomainError>;

    /// Store a todo
    ///
    /// Replaces the record when `todo.id` is already taken; assigns a fresh
    /// id when `todo.id` is `None`.
    async fn save(&self, todo: &NewTodo) -> Result<Todo, DomainError>;

    /// Delete a todo, returning whether a record was removed
    async fn delete(&self, id: TodoId) -> Result<bool, DomainError>;

    /// Replace the fields of an existing todo. The stored id never changes.
    async fn update(&self, id: TodoId, todo: &NewTodo) -> Result<Todo, DomainError>;
}

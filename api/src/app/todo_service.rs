//! Todo service
//!
//! Decides the outcome of each todo operation: existence checks happen here,
//! before any mutation reaches the repository.

use std::sync::Arc;

use crate::domain::entities::{NewTodo, Todo, TodoId};
use crate::domain::ports::TodoRepository;
use crate::error::AppError;

/// Service for managing todos
pub struct TodoService<TR>
where
    TR: TodoRepository + ?Sized,
{
    todos: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository + ?Sized,
{
    pub fn new(todos: Arc<TR>) -> Self {
        Self { todos }
    }

    /// List all todos in repository order
    pub async fn list(&self) -> Result<Vec<Todo>, AppError> {
        let todos = self.todos.list_all().await?;
        tracing::debug!(count = todos.len(), "Listed todos");
        Ok(todos)
    }

    /// Get a todo by ID
    pub async fn get(&self, id: TodoId) -> Result<Todo, AppError> {
        self.todos
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Store a todo
    ///
    /// An id that is already taken is overwritten; a missing id is assigned
    /// by the repository.
    pub async fn create(&self, todo: NewTodo) -> Result<Todo, AppError> {
        let saved = self.todos.save(&todo).await?;
        tracing::info!(todo_id = saved.id.0, "Saved todo");
        Ok(saved)
    }

    /// Delete a todo
    ///
    /// Nothing is deleted when the id is unknown.
    pub async fn delete(&self, id: TodoId) -> Result<(), AppError> {
        if self.todos.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        if !self.todos.delete(id).await? {
            // Removed by a concurrent request between the lookup and the delete
            return Err(not_found(id));
        }

        tracing::info!(todo_id = id.0, "Deleted todo");
        Ok(())
    }

    /// Replace the fields of an existing todo
    ///
    /// `id` is authoritative; any id carried by `todo` is ignored.
    pub async fn update(&self, id: TodoId, todo: NewTodo) -> Result<Todo, AppError> {
        if self.todos.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let updated = self.todos.update(id, &todo).await?;
        tracing::info!(todo_id = id.0, "Updated todo");
        Ok(updated)
    }
}

fn not_found(id: TodoId) -> AppError {
    AppError::NotFound(format!("Todo {} not found", id))
}

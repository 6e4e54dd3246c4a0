//! In-memory adapter for TodoRepository

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::{NewTodo, Todo, TodoId};
use crate::domain::ports::TodoRepository;
use crate::error::DomainError;

/// In-memory implementation of TodoRepository
///
/// Keeps todos in insertion order. A save that reuses an id replaces the
/// record in place.
#[derive(Default, Clone)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a todo
    #[cfg(test)]
    pub fn with_todo(self, todo: Todo) -> Self {
        if let Ok(mut todos) = self.todos.write() {
            match todos.iter_mut().find(|t| t.id == todo.id) {
                Some(existing) => *existing = todo,
                None => todos.push(todo),
            }
        }
        self
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Todo>>, DomainError> {
        self.todos
            .read()
            .map_err(|e| DomainError::Internal(format!("todo store lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Todo>>, DomainError> {
        self.todos
            .write()
            .map_err(|e| DomainError::Internal(format!("todo store lock poisoned: {}", e)))
    }
}

/// Next free id: one past the highest id in use
fn next_id(todos: &[Todo]) -> Result<TodoId, DomainError> {
    let max = todos.iter().map(|t| t.id.0).max().unwrap_or(0);
    max.checked_add(1)
        .map(TodoId)
        .ok_or_else(|| DomainError::Internal("todo id space exhausted".to_string()))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list_all(&self) -> Result<Vec<Todo>, DomainError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, DomainError> {
        Ok(self.read()?.iter().find(|t| t.id == id).cloned())
    }

    async fn save(&self, todo: &NewTodo) -> Result<Todo, DomainError> {
        let mut todos = self.write()?;

        let id = match todo.id {
            Some(id) => id,
            None => next_id(&todos)?,
        };
        let saved = todo.clone().into_todo(id);

        match todos.iter_mut().find(|t| t.id == id) {
            Some(existing) => *existing = saved.clone(),
            None => todos.push(saved.clone()),
        }

        Ok(saved)
    }

    async fn delete(&self, id: TodoId) -> Result<bool, DomainError> {
        let mut todos = self.write()?;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        Ok(todos.len() != before)
    }

    async fn update(&self, id: TodoId, todo: &NewTodo) -> Result<Todo, DomainError> {
        let mut todos = self.write()?;

        let existing = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Todo {} not found", id)))?;

        existing.title = todo.title.clone();
        existing.completed = todo.completed;
        existing.order = todo.order;

        Ok(existing.clone())
    }
}

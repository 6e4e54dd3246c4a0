//! Todo handlers
//!
//! CRUD endpoints for todos. Body and path parsing failures are reported as
//! 400 before the repository is consulted.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{NewTodo, Todo, TodoId};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or updating a todo
#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    /// Ignored on update; the path id wins
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub completed: bool,
    pub order: i64,
}

impl From<TodoPayload> for NewTodo {
    fn from(payload: TodoPayload) -> Self {
        NewTodo {
            id: payload.id.map(TodoId),
            title: payload.title,
            completed: payload.completed,
            order: payload.order,
        }
    }
}

fn todo_id(path: Result<Path<i64>, PathRejection>) -> Result<TodoId, AppError> {
    path.map(|Path(id)| TodoId(id))
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

fn payload(body: Result<Json<TodoPayload>, JsonRejection>) -> Result<NewTodo, AppError> {
    body.map(|Json(payload)| payload.into())
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// GET /todos
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    Ok(Json(state.todo_service.list().await?))
}

/// GET /todos/:id
pub async fn get_todo(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Todo>, AppError> {
    let id = todo_id(path)?;
    Ok(Json(state.todo_service.get(id).await?))
}

/// POST /todos
///
/// Stores the todo and returns it with 201. Reusing an existing id overwrites it.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = payload(body)?;
    let saved = state.todo_service.create(todo).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /todos/:id
pub async fn delete_todo(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = todo_id(path)?;
    state.todo_service.delete(id).await?;
    Ok(StatusCode::OK)
}

/// PATCH /todos/:id
///
/// The body is validated before the id is looked up, so a bad body is a 400
/// even for an unknown id.
pub async fn update_todo(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let todo = payload(body)?;
    let id = todo_id(path)?;
    Ok(Json(state.todo_service.update(id, todo).await?))
}

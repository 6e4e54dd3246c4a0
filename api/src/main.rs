//! Todo API Server
//!
//! A small CRUD service for todo items.
//! Uses hexagonal (ports & adapters) architecture: handlers talk to a
//! `TodoService`, which only sees the `TodoRepository` port.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryTodoRepository, PostgresTodoRepository};
use app::TodoService;
use config::Config;
use domain::ports::TodoRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub todo_service: Arc<TodoService<dyn TodoRepository>>,
}

impl AppState {
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self {
            todo_service: Arc::new(TodoService::new(todos)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Todos
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/:id",
            get(handlers::get_todo)
                .patch(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        // Middleware
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

/// Pick the repository adapter: PostgreSQL when configured, memory otherwise
async fn connect_repository(config: &Config) -> anyhow::Result<Arc<dyn TodoRepository>> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(url)
                .await
                .context("Failed to connect to database")?;
            let repo = PostgresTodoRepository::new(db);
            repo.ensure_schema()
                .await
                .context("Failed to create todos table")?;
            tracing::info!("Database connected");
            Ok(Arc::new(repo))
        }
        None => {
            tracing::info!("DATABASE_URL not set, keeping todos in memory");
            Ok(Arc::new(InMemoryTodoRepository::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todo_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Todo API...");

    // Load configuration
    let config = Config::from_env();

    let todos = connect_repository(&config).await?;
    let app = build_router(AppState::new(todos));

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

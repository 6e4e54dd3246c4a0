//! PostgreSQL adapter for TodoRepository

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder, Schema, Set, Statement, TransactionTrait,
};

use crate::domain::entities::{NewTodo, Todo, TodoId};
use crate::domain::ports::TodoRepository;
use crate::entity::todos;
use crate::error::DomainError;

/// PostgreSQL implementation of TodoRepository
pub struct PostgresTodoRepository {
    db: DatabaseConnection,
}

impl PostgresTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the `todos` table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        let backend = self.db.get_database_backend();
        let mut stmt = Schema::new(backend).create_table_from_entity(todos::Entity);
        stmt.if_not_exists();

        self.db
            .execute(backend.build(&stmt))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    /// Insert or overwrite a todo under a caller-chosen id
    ///
    /// The id sequence is moved past the highest id in the same transaction,
    /// so later inserts without an id cannot collide with it.
    async fn upsert(&self, id: TodoId, todo: &NewTodo) -> Result<todos::Model, DbErr> {
        let txn = self.db.begin().await?;

        let model = todos::Entity::insert(active_model(Some(id), todo))
            .on_conflict(
                OnConflict::column(todos::Column::Id)
                    .update_columns([
                        todos::Column::Title,
                        todos::Column::Completed,
                        todos::Column::SortOrder,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&txn)
            .await?;

        txn.execute(Statement::from_string(
            txn.get_database_backend(),
            SYNC_ID_SEQUENCE,
        ))
        .await?;

        txn.commit().await?;
        Ok(model)
    }
}

const SYNC_ID_SEQUENCE: &str = "SELECT setval(pg_get_serial_sequence('todos', 'id'), \
     GREATEST(MAX(id), 1)) FROM todos";

fn active_model(id: Option<TodoId>, todo: &NewTodo) -> todos::ActiveModel {
    let mut model = todos::ActiveModel {
        title: Set(todo.title.clone()),
        completed: Set(todo.completed),
        sort_order: Set(todo.order),
        ..Default::default()
    };
    if let Some(id) = id {
        model.id = Set(id.0);
    }
    model
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn list_all(&self) -> Result<Vec<Todo>, DomainError> {
        let results = todos::Entity::find()
            .order_by_asc(todos::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, DomainError> {
        let result = todos::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn save(&self, todo: &NewTodo) -> Result<Todo, DomainError> {
        let result = match todo.id {
            Some(id) => self.upsert(id, todo).await,
            None => active_model(None, todo).insert(&self.db).await,
        };

        result
            .map(|m| m.into())
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, DomainError> {
        let result = todos::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn update(&self, id: TodoId, todo: &NewTodo) -> Result<Todo, DomainError> {
        match active_model(Some(id), todo).update(&self.db).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) => {
                Err(DomainError::NotFound(format!("Todo {} not found", id)))
            }
            Err(e) => Err(DomainError::Database(e.to_string())),
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<todos::Model> for Todo {
    fn from(model: todos::Model) -> Self {
        Todo {
            id: TodoId(model.id),
            title: model.title,
            completed: model.completed,
            order: model.sort_order,
        }
    }
}

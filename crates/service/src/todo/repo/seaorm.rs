use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::todo::domain::{CreateTodoInput, Todo, UpdateTodoInput};
use crate::todo::repository::TodoRepository;

/// SeaORM-backed repository implementation (Postgres or SQLite).
pub struct SeaOrmTodoRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl TodoRepository for SeaOrmTodoRepository {
    async fn insert(&self, input: &CreateTodoInput) -> Result<Todo, ServiceError> {
        Ok(models::todo::create(&self.db, &input.title, input.completed).await?)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, ServiceError> {
        Ok(models::todo::list(&self.db).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, ServiceError> {
        Ok(models::todo::find(&self.db, id).await?)
    }

    async fn find_and_update(&self, id: Uuid, input: &UpdateTodoInput) -> Result<Option<Todo>, ServiceError> {
        Ok(models::todo::update(&self.db, id, input.title.as_deref(), input.completed).await?)
    }

    async fn find_and_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(models::todo::delete(&self.db, id).await?)
    }
}

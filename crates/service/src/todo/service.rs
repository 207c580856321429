use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{CreateTodoInput, Todo, UpdateTodoInput};
use super::repository::TodoRepository;
use crate::errors::ServiceError;
use crate::validate::Validate;

const ENTITY: &str = "Todo";

/// Todo business service independent of web framework.
///
/// Every method issues exactly one repository call; an absent record becomes
/// [`ServiceError::NotFound`] carrying the id exactly as the caller passed it.
pub struct TodoService<R: TodoRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: TodoRepository + ?Sized> TodoService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a todo.
    ///
    /// # Examples
    /// ```
    /// use service::todo::{repository::mock::MockTodoRepository, CreateTodoInput, TodoService};
    /// use std::sync::Arc;
    /// let svc = TodoService::new(Arc::new(MockTodoRepository::default()));
    /// let todo = tokio_test::block_on(svc.create(CreateTodoInput { title: "ship it".into(), completed: false })).unwrap();
    /// assert_eq!(todo.title, "ship it");
    /// assert!(!todo.completed);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateTodoInput) -> Result<Todo, ServiceError> {
        input.validate()?;
        let todo = self.repo.insert(&input).await?;
        info!(action = "create", id = %todo.id, title = %todo.title, completed = todo.completed, "todo created");
        Ok(todo)
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Todo>, ServiceError> {
        let todos = self.repo.find_all().await?;
        info!(action = "find_all", count = todos.len(), "todos listed");
        Ok(todos)
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: &str) -> Result<Todo, ServiceError> {
        let found = match parse_id(id) {
            Some(uuid) => self.repo.find_by_id(uuid).await?,
            None => None,
        };
        match found {
            Some(todo) => {
                info!(action = "find_one", id = %todo.id, "todo fetched");
                Ok(todo)
            }
            None => {
                warn!(action = "find_one", id, message = "not found");
                Err(ServiceError::not_found(ENTITY, id))
            }
        }
    }

    /// Partial update. Fields left `None` keep their stored values.
    ///
    /// # Examples
    /// ```
    /// use service::todo::{repository::mock::MockTodoRepository, CreateTodoInput, UpdateTodoInput, TodoService};
    /// use std::sync::Arc;
    /// let svc = TodoService::new(Arc::new(MockTodoRepository::default()));
    /// let todo = tokio_test::block_on(svc.create(CreateTodoInput { title: "ship it".into(), completed: false })).unwrap();
    /// let patch = UpdateTodoInput { completed: Some(true), ..Default::default() };
    /// let done = tokio_test::block_on(svc.update(&todo.id.to_string(), patch)).unwrap();
    /// assert!(done.completed);
    /// assert_eq!(done.title, "ship it");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: UpdateTodoInput) -> Result<Todo, ServiceError> {
        input.validate()?;
        let updated = match parse_id(id) {
            Some(uuid) => self.repo.find_and_update(uuid, &input).await?,
            None => None,
        };
        match updated {
            Some(todo) => {
                info!(action = "update", id = %todo.id, title = %todo.title, completed = todo.completed, "todo updated");
                Ok(todo)
            }
            None => {
                warn!(action = "update", id, update = ?input, message = "not found");
                Err(ServiceError::not_found(ENTITY, id))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<(), ServiceError> {
        let removed = match parse_id(id) {
            Some(uuid) => self.repo.find_and_delete(uuid).await?,
            None => false,
        };
        if !removed {
            warn!(action = "remove", id, message = "not found");
            return Err(ServiceError::not_found(ENTITY, id));
        }
        info!(action = "remove", id, "todo removed");
        Ok(())
    }
}

/// Ids are store-assigned UUIDs; anything else cannot name a record.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}

use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{CreateTodoInput, Todo, UpdateTodoInput};
use crate::errors::ServiceError;

/// Document store abstraction for todos. Each method is one store operation.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn insert(&self, input: &CreateTodoInput) -> Result<Todo, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Todo>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, ServiceError>;
    /// Returns the record as it is after the update.
    async fn find_and_update(&self, id: Uuid, input: &UpdateTodoInput) -> Result<Option<Todo>, ServiceError>;
    /// Returns whether a record was removed.
    async fn find_and_delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockTodoRepository {
        todos: Mutex<Vec<Todo>>,
        calls: AtomicUsize,
    }

    impl MockTodoRepository {
        /// Number of store operations issued so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl TodoRepository for MockTodoRepository {
        async fn insert(&self, input: &CreateTodoInput) -> Result<Todo, ServiceError> {
            self.hit();
            let todo = Todo::new(&input.title, input.completed)?;
            self.todos.lock().unwrap().push(todo.clone());
            Ok(todo)
        }

        async fn find_all(&self) -> Result<Vec<Todo>, ServiceError> {
            self.hit();
            Ok(self.todos.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, ServiceError> {
            self.hit();
            Ok(self.todos.lock().unwrap().iter().find(|t| t.id == id).cloned())
        }

        async fn find_and_update(&self, id: Uuid, input: &UpdateTodoInput) -> Result<Option<Todo>, ServiceError> {
            self.hit();
            let mut todos = self.todos.lock().unwrap();
            let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
                return Ok(None);
            };
            todo.apply(input.title.as_deref(), input.completed)?;
            Ok(Some(todo.clone()))
        }

        async fn find_and_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            self.hit();
            let mut todos = self.todos.lock().unwrap();
            let before = todos.len();
            todos.retain(|t| t.id != id);
            Ok(todos.len() != before)
        }
    }
}

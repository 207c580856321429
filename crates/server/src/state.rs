use std::sync::Arc;

use service::todo::{TodoRepository, TodoService};

/// Handler state. The repository is chosen at startup, so the service is held behind `dyn`.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<TodoService<dyn TodoRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { todos: Arc::new(TodoService::new(repo)) }
    }
}

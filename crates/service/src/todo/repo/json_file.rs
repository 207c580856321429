use std::{path::PathBuf, sync::Arc};

use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;
use crate::todo::domain::{CreateTodoInput, Todo, UpdateTodoInput};
use crate::todo::repository::TodoRepository;

/// Document store keeping every todo in one JSON file, keyed by id.
pub struct JsonFileTodoRepository {
    store: Arc<JsonMapStore<String, Todo>>,
}

impl JsonFileTodoRepository {
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        Ok(Self { store: JsonMapStore::new(path).await? })
    }
}

#[async_trait::async_trait]
impl TodoRepository for JsonFileTodoRepository {
    async fn insert(&self, input: &CreateTodoInput) -> Result<Todo, ServiceError> {
        let todo = Todo::new(&input.title, input.completed)?;
        self.store.insert(todo.id.to_string(), todo.clone()).await?;
        Ok(todo)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, ServiceError> {
        let mut todos = self.store.values().await;
        todos.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(todos)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, ServiceError> {
        Ok(self.store.get(&id.to_string()).await)
    }

    async fn find_and_update(&self, id: Uuid, input: &UpdateTodoInput) -> Result<Option<Todo>, ServiceError> {
        self.store
            .update(&id.to_string(), |todo| {
                todo.apply(input.title.as_deref(), input.completed)?;
                Ok(())
            })
            .await
    }

    async fn find_and_delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.store.remove(&id.to_string()).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn documents_survive_reopen() -> Result<(), anyhow::Error> {
        let path = std::env::temp_dir().join(format!("todo_docs_{}.json", Uuid::new_v4()));
        let repo = JsonFileTodoRepository::open(&path).await?;
        let a = repo.insert(&CreateTodoInput { title: "first".into(), completed: false }).await?;
        let b = repo.insert(&CreateTodoInput { title: "second".into(), completed: true }).await?;

        let reopened = JsonFileTodoRepository::open(&path).await?;
        assert_eq!(reopened.find_by_id(a.id).await?, Some(a.clone()));
        let ids: Vec<Uuid> = reopened.find_all().await?.into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&a.id) && ids.contains(&b.id));

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}

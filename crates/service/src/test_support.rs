#![cfg(test)]
use std::path::PathBuf;

use configs::DatabaseConfig;
use models::db::connect_and_migrate;

use crate::todo::repo::{JsonFileTodoRepository, SeaOrmTodoRepository};

/// SQL store over a private in-memory SQLite database with migrations applied.
pub async fn sql_repo() -> Result<SeaOrmTodoRepository, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_and_migrate(&cfg).await?;
    Ok(SeaOrmTodoRepository::new(db))
}

/// JSON document store in a fresh temp file. Caller removes the file.
pub async fn json_repo() -> Result<(JsonFileTodoRepository, PathBuf), anyhow::Error> {
    let path = std::env::temp_dir().join(format!("todo_store_{}.json", uuid::Uuid::new_v4()));
    let repo = JsonFileTodoRepository::open(&path).await?;
    Ok((repo, path))
}

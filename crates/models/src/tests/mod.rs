/// CRUD operations against the `todo` table
pub mod crud_tests;

use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with the schema applied.
pub(crate) async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    crate::db::connect_and_migrate(&cfg).await
}

use anyhow::Result;
use uuid::Uuid;

use super::memory_db;
use crate::{errors::ModelError, todo};

#[tokio::test]
async fn create_assigns_id_and_defaults() -> Result<()> {
    let db = memory_db().await?;
    let created = todo::create(&db, "buy milk", false).await?;
    assert_eq!(created.title, "buy milk");
    assert!(!created.completed);
    assert_eq!(created.created_at, created.updated_at);

    let found = todo::find(&db, created.id).await?.expect("row exists");
    assert_eq!(found, created);
    Ok(())
}

#[tokio::test]
async fn create_rejects_blank_title() -> Result<()> {
    let db = memory_db().await?;
    let err = todo::create(&db, "   ", false).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert!(todo::list(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn update_touches_only_supplied_fields() -> Result<()> {
    let db = memory_db().await?;
    let created = todo::create(&db, "write report", false).await?;

    let updated = todo::update(&db, created.id, None, Some(true)).await?.expect("row exists");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "write report");
    assert!(updated.completed);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let renamed = todo::update(&db, created.id, Some("write final report"), None)
        .await?
        .expect("row exists");
    assert_eq!(renamed.title, "write final report");
    assert!(renamed.completed);
    Ok(())
}

#[tokio::test]
async fn update_and_delete_missing_row() -> Result<()> {
    let db = memory_db().await?;
    let missing = Uuid::new_v4();
    assert!(todo::update(&db, missing, Some("x"), None).await?.is_none());
    assert!(!todo::delete(&db, missing).await?);
    assert!(todo::find(&db, missing).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_removes_row() -> Result<()> {
    let db = memory_db().await?;
    let a = todo::create(&db, "a", false).await?;
    let b = todo::create(&db, "b", true).await?;

    assert!(todo::delete(&db, a.id).await?);
    assert!(todo::find(&db, a.id).await?.is_none());

    let rest = todo::list(&db).await?;
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].id, b.id);
    Ok(())
}

#[test]
fn apply_keeps_unsupplied_fields() {
    let mut m = todo::Model::new("plan trip", false).unwrap();
    let before = m.clone();
    m.apply(None, None).unwrap();
    assert_eq!(m.title, before.title);
    assert_eq!(m.completed, before.completed);
    assert!(m.apply(Some(""), None).is_err());
    assert_eq!(m.title, "plan trip");
}

#[test]
fn title_length_is_capped() {
    let longest = "x".repeat(todo::TITLE_MAX_CHARS);
    assert!(todo::validate_title(&longest).is_ok());
    let too_long = "x".repeat(todo::TITLE_MAX_CHARS + 1);
    assert!(matches!(todo::validate_title(&too_long), Err(ModelError::Validation(_))));
    // counted in characters, not bytes
    assert!(todo::validate_title(&"é".repeat(todo::TITLE_MAX_CHARS)).is_ok());
}

#[tokio::test]
async fn update_rejects_overlong_title_without_writing() -> Result<()> {
    let db = memory_db().await?;
    let created = todo::create(&db, "short", false).await?;
    let too_long = "y".repeat(todo::TITLE_MAX_CHARS + 1);
    let err = todo::update(&db, created.id, Some(&too_long), None).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert_eq!(todo::find(&db, created.id).await?.map(|t| t.title), Some("short".into()));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn update_racing_delete_reports_absent_not_error() -> Result<()> {
    let path = std::env::temp_dir().join(format!("todo_race_{}.sqlite", Uuid::new_v4()));
    let cfg = configs::DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: 4,
        ..Default::default()
    };
    let db = crate::db::connect_and_migrate(&cfg).await?;

    for _ in 0..100 {
        let row = todo::create(&db, "contended", false).await?;
        let (upd_db, del_db) = (db.clone(), db.clone());
        let update = tokio::spawn(async move { todo::update(&upd_db, row.id, None, Some(true)).await });
        let delete = tokio::spawn(async move { todo::delete(&del_db, row.id).await });

        let updated = update.await?;
        assert!(updated.is_ok(), "update failed instead of reporting absence: {updated:?}");
        assert!(delete.await??);
        assert!(todo::find(&db, row.id).await?.is_none());
    }

    db.close().await?;
    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

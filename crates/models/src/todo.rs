//! The `todo` entity and its persistence helpers.

use chrono::{SubsecRound, Utc};
use sea_orm::{
    entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Fresh document with a newly assigned id, both timestamps set to now.
    pub fn new(title: &str, completed: bool) -> Result<Self, ModelError> {
        validate_title(title)?;
        let now = now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            completed,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply the supplied fields only. `updated_at` moves even when nothing else does.
    pub fn apply(&mut self, title: Option<&str>, completed: Option<bool>) -> Result<(), ModelError> {
        if let Some(t) = title {
            validate_title(t)?;
            self.title = t.to_string();
        }
        if let Some(c) = completed {
            self.completed = c;
        }
        self.updated_at = now();
        Ok(())
    }
}

/// Timestamps are kept at microsecond precision so every backend round-trips them unchanged.
pub fn now() -> DateTimeWithTimeZone {
    Utc::now().trunc_subsecs(6).into()
}

/// Upper bound on title length in characters; matches the `VARCHAR(1024)` column.
pub const TITLE_MAX_CHARS: usize = 1024;

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("title must not be empty".into()));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ModelError::Validation(format!(
            "title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, title: &str, completed: bool) -> Result<Model, ModelError> {
    let am: ActiveModel = Model::new(title, completed)?.into();
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// All todos, oldest first.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Partial update. Returns the post-update row, or `None` when `id` does not exist.
///
/// The write is a single `UPDATE .. WHERE id = ?`; a row deleted after the read
/// shows up as zero affected rows and is reported as absent.
pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    title: Option<&str>,
    completed: Option<bool>,
) -> Result<Option<Model>, ModelError> {
    if let Some(t) = title {
        validate_title(t)?;
    }
    let Some(mut next) = find(db, id).await? else {
        return Ok(None);
    };
    next.apply(title, completed)?;

    let changes = ActiveModel {
        id: NotSet,
        title: Set(next.title.clone()),
        completed: Set(next.completed),
        created_at: NotSet,
        updated_at: Set(next.updated_at),
    };
    let res = Entity::update_many()
        .set(changes)
        .filter(Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    Ok(Some(next))
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

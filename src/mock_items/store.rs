use super::models::{ActiveModel, Column, Entity, Model, NewMockItem};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder,
};

/// Persistence port for mock items.
///
/// Updates are an explicit read-modify-write: callers `get` a record, change
/// it, then `put` it back. The two calls are separate statements.
#[async_trait]
pub trait MockItemStore: Send + Sync {
    async fn insert(&self, item: NewMockItem, created_at: DateTime<Utc>) -> Result<Model, DbErr>;

    /// All records, newest id first
    async fn list(&self) -> Result<Vec<Model>, DbErr>;

    async fn get(&self, id: i64) -> Result<Option<Model>, DbErr>;

    /// Write back the mutable columns (`name`, `description`) of an existing record.
    /// Fails with `DbErr::RecordNotUpdated` if the row is gone.
    async fn put(&self, item: Model) -> Result<Model, DbErr>;

    /// Returns the number of rows removed
    async fn delete(&self, id: i64) -> Result<u64, DbErr>;
}

#[async_trait]
impl MockItemStore for DatabaseConnection {
    async fn insert(&self, item: NewMockItem, created_at: DateTime<Utc>) -> Result<Model, DbErr> {
        ActiveModel {
            name: Set(item.name),
            description: Set(item.description),
            created_at: Set(created_at),
            ..Default::default()
        }
        .insert(self)
        .await
    }

    async fn list(&self) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_desc(Column::Id).all(self).await
    }

    async fn get(&self, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(self).await
    }

    async fn put(&self, item: Model) -> Result<Model, DbErr> {
        ActiveModel {
            id: Unchanged(item.id),
            name: Set(item.name),
            description: Set(item.description),
            created_at: Unchanged(item.created_at),
        }
        .update(self)
        .await
    }

    async fn delete(&self, id: i64) -> Result<u64, DbErr> {
        let result = Entity::delete_by_id(id).exec(self).await?;
        Ok(result.rows_affected)
    }
}

use super::models::{MockItem, MockItemPayload};
use super::store::MockItemStore;
use crate::common::errors::{ApiError, ApiResult, DbErrorExt};
use crate::not_found;
use chrono::Utc;
use sea_orm::DbErr;

const RESOURCE: &str = "mock item";

/// Parse a path identifier, accepting only positive integers.
/// `message` becomes the `error` field of the 400 response.
pub fn parse_id(raw: &str, message: &str) -> ApiResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::bad_request(message, None)),
    }
}

pub async fn create<S>(store: &S, payload: MockItemPayload) -> ApiResult<MockItem>
where
    S: MockItemStore + ?Sized,
{
    let item = payload.validate()?;

    let model = store
        .insert(item, Utc::now())
        .await
        .map_err(|e| e.to_api_error("Failed to create mock item"))?;

    tracing::info!("Created mock item {}", model.id);
    Ok(model.into())
}

pub async fn list<S>(store: &S) -> ApiResult<Vec<MockItem>>
where
    S: MockItemStore + ?Sized,
{
    let models = store
        .list()
        .await
        .map_err(|e| e.to_api_error("database error"))?;

    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn update<S>(store: &S, id: i64, payload: MockItemPayload) -> ApiResult<MockItem>
where
    S: MockItemStore + ?Sized,
{
    let changes = payload.validate()?;

    let mut model = store
        .get(id)
        .await
        .map_err(|e| e.to_api_error("database error"))?
        .ok_or_else(|| not_found!(RESOURCE, id))?;

    model.name = changes.name;
    model.description = changes.description;

    let saved = match store.put(model).await {
        Ok(saved) => saved,
        // Deleted between the read and the write
        Err(DbErr::RecordNotUpdated) => return Err(not_found!(RESOURCE, id)),
        Err(e) => return Err(e.to_api_error("database error")),
    };

    tracing::info!("Updated mock item {id}");
    Ok(saved.into())
}

pub async fn delete<S>(store: &S, id: i64) -> ApiResult<()>
where
    S: MockItemStore + ?Sized,
{
    let rows_affected = store
        .delete(id)
        .await
        .map_err(|e| e.to_api_error("database error"))?;

    if rows_affected == 0 {
        return Err(not_found!(RESOURCE, id));
    }

    tracing::info!("Deleted mock item {id}");
    Ok(())
}

use super::models::{MockItem, MockItemPayload};
use super::services;
use crate::common::errors::ApiError;
use crate::common::models::ErrorResponse;
use crate::common::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(create_mock_item, list_mock_items))
        .routes(routes!(update_mock_item, delete_mock_item))
        .with_state(state.clone())
}

#[utoipa::path(
    post,
    path = "/api/mock-items",
    request_body = MockItemPayload,
    responses(
        (status = CREATED, description = "Mock item created", body = MockItem),
        (status = BAD_REQUEST, description = "Malformed payload or failed validation", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "mock-items",
    summary = "Create mock item"
)]
pub async fn create_mock_item(
    State(state): State<AppState>,
    payload: Result<Json<MockItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<MockItem>), ApiError> {
    let Json(payload) = payload
        .map_err(|e| ApiError::bad_request("Invalid request payload", Some(e.body_text())))?;

    let item = services::create(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get,
    path = "/api/mock-items",
    responses(
        (status = OK, description = "All mock items, most recent first", body = Vec<MockItem>),
        (status = INTERNAL_SERVER_ERROR, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "mock-items",
    summary = "List mock items"
)]
pub async fn list_mock_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<MockItem>>, ApiError> {
    Ok(Json(services::list(&state.db).await?))
}

#[utoipa::path(
    put,
    path = "/api/mock-items/{id}",
    params(
        ("id" = i64, Path, description = "Mock item ID")
    ),
    request_body = MockItemPayload,
    responses(
        (status = OK, description = "Mock item updated", body = MockItem),
        (status = BAD_REQUEST, description = "Invalid id, malformed payload, failed validation or unknown id", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "mock-items",
    summary = "Update mock item"
)]
pub async fn update_mock_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MockItemPayload>, JsonRejection>,
) -> Result<Json<MockItem>, ApiError> {
    let id = services::parse_id(&id, "Invalid ID parameter")?;
    let Json(payload) =
        payload.map_err(|e| ApiError::bad_request("Invalid json", Some(e.body_text())))?;

    // Unknown ids are answered with 400 on this route, unlike delete
    let item = services::update(&state.db, id, payload)
        .await
        .map_err(|err| match err {
            ApiError::NotFound { .. } => ApiError::bad_request("Not found", None),
            other => other,
        })?;

    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/mock-items/{id}",
    params(
        ("id" = i64, Path, description = "Mock item ID")
    ),
    responses(
        (status = NO_CONTENT, description = "Mock item deleted"),
        (status = BAD_REQUEST, description = "Invalid id", body = ErrorResponse),
        (status = NOT_FOUND, description = "No mock item with this id", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "mock-items",
    summary = "Delete mock item"
)]
pub async fn delete_mock_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = services::parse_id(&id, "Invalid id")?;
    services::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

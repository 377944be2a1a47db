use super::models::ActiveModel;
use crate::config::test_helpers::{TestApp, extract_response_body, send_json, setup_test_app};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn create_item(app: &TestApp, name: &str, description: Option<&str>) -> Value {
    let mut data = json!({ "name": name });
    if let Some(text) = description {
        data["description"] = json!(text);
    }

    let (status, body) = send_json(&app.router, "POST", "/api/mock-items", Some(data)).await;
    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to create mock item: {body:?}"
    );
    body
}

async fn list_items(app: &TestApp) -> Vec<Value> {
    let (status, body) = send_json(&app.router, "GET", "/api/mock-items", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().expect("Expected a JSON array").clone()
}

#[tokio::test]
async fn test_mock_item_crud_operations() {
    let app = setup_test_app().await;

    // Create
    let created = create_item(&app, "Test pump", Some("Created via API test")).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Test pump");
    assert_eq!(created["description"], "Created via API test");
    assert!(created["createdAt"].is_string());

    // Update
    let (status, updated) = send_json(
        &app.router,
        "PUT",
        &format!("/api/mock-items/{id}"),
        Some(json!({ "name": "Renamed pump", "description": "Updated via API test" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "Failed to update: {updated:?}");
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Renamed pump");
    assert_eq!(updated["description"], "Updated via API test");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    // Delete
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/mock-items/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty(), "204 must not carry a body");

    assert!(list_items(&app).await.is_empty());
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
    let app = setup_test_app().await;

    let first = create_item(&app, "First", None).await;
    let second = create_item(&app, "Second", None).await;
    let third = create_item(&app, "Third", None).await;

    let ids: Vec<i64> = [&first, &second, &third]
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {ids:?}");
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let app = setup_test_app().await;

    let first = create_item(&app, "Short lived", None).await;
    let first_id = first["id"].as_i64().unwrap();
    let (status, _) = send_json(
        &app.router,
        "DELETE",
        &format!("/api/mock-items/{first_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let second = create_item(&app, "Next", None).await;
    assert!(second["id"].as_i64().unwrap() > first_id);
}

#[tokio::test]
async fn test_create_without_description_returns_empty_string() {
    let app = setup_test_app().await;

    let created = create_item(&app, "Bare", None).await;
    assert_eq!(created["description"], "");
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = setup_test_app().await;

    for payload in [json!({ "name": "" }), json!({ "description": "no name" })] {
        let (status, body) =
            send_json(&app.router, "POST", "/api/mock-items", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload} accepted");
        assert_eq!(body["error"], "Validation failed");
        assert!(
            body["details"].as_str().unwrap().starts_with("name:"),
            "details should name the field: {body:?}"
        );
    }

    // Nothing was persisted
    assert!(list_items(&app).await.is_empty());
}

#[tokio::test]
async fn test_create_with_malformed_json() {
    let app = setup_test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/mock-items")
                .header("content-type", "application/json")
                .body(Body::from("{\"name\": "))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request payload");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_create_with_wrong_field_type() {
    let app = setup_test_app().await;

    let (status, body) = send_json(
        &app.router,
        "POST",
        "/api/mock-items",
        Some(json!({ "name": 12 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request payload");
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = setup_test_app().await;

    let a = create_item(&app, "A", Some("first")).await;
    let b = create_item(&app, "B", Some("second")).await;

    let items = list_items(&app).await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], b);
    assert_eq!(items[1], a);
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = setup_test_app().await;
    assert_eq!(list_items(&app).await, Vec::<Value>::new());
}

#[tokio::test]
async fn test_created_item_round_trips_through_list() {
    let app = setup_test_app().await;

    let created = create_item(&app, "Échangeur  #3 ", Some("  spaces kept  ")).await;
    let items = list_items(&app).await;

    assert_eq!(items, vec![created.clone()]);
    assert_eq!(items[0]["name"], "Échangeur  #3 ");
    assert_eq!(items[0]["description"], "  spaces kept  ");
}

#[tokio::test]
async fn test_update_then_list_shows_new_name() {
    let app = setup_test_app().await;

    let created = create_item(&app, "Original", Some("keep")).await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send_json(
        &app.router,
        "PUT",
        &format!("/api/mock-items/{id}"),
        Some(json!({ "name": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let items = list_items(&app).await;
    assert_eq!(items[0]["name"], "X");
    assert_eq!(items[0]["description"], "");
    assert_eq!(items[0]["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_nonexistent_id_returns_400() {
    let app = setup_test_app().await;
    let existing = create_item(&app, "Untouched", Some("same")).await;

    let (status, body) = send_json(
        &app.router,
        "PUT",
        "/api/mock-items/99999",
        Some(json!({ "name": "Ghost" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Not found" }));
    assert_eq!(list_items(&app).await, vec![existing]);
}

#[tokio::test]
async fn test_update_invalid_id() {
    let app = setup_test_app().await;

    for id in ["0", "-1", "abc"] {
        let (status, body) = send_json(
            &app.router,
            "PUT",
            &format!("/api/mock-items/{id}"),
            Some(json!({ "name": "Valid" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {id} accepted");
        assert_eq!(body["error"], "Invalid ID parameter");
    }
}

#[tokio::test]
async fn test_update_validation_and_malformed_body() {
    let app = setup_test_app().await;
    let created = create_item(&app, "Stable", None).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app.router,
        "PUT",
        &format!("/api/mock-items/{id}"),
        Some(json!({ "name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/mock-items/{id}"))
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid json");

    // The stored item is unchanged
    assert_eq!(list_items(&app).await, vec![created]);
}

#[tokio::test]
async fn test_delete_twice_returns_404() {
    let app = setup_test_app().await;

    let created = create_item(&app, "Once", None).await;
    let uri = format!("/api/mock-items/{}", created["id"]);

    let (status, body) = send_json(&app.router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send_json(&app.router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_delete_invalid_id() {
    let app = setup_test_app().await;

    let (status, body) = send_json(&app.router, "DELETE", "/api/mock-items/zero", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid id" }));
}

#[tokio::test]
async fn test_storage_failure_returns_500() {
    let app = setup_test_app().await;
    app.db.clone().close().await.unwrap();

    let (status, body) = send_json(&app.router, "GET", "/api/mock-items", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "database error");
    assert!(body["details"].is_string());

    let (status, body) = send_json(
        &app.router,
        "POST",
        "/api/mock-items",
        Some(json!({ "name": "Never stored" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to create mock item");
}

#[tokio::test]
async fn test_ids_beyond_32_bits_are_valid() {
    let app = setup_test_app().await;

    let (status, body) = send_json(
        &app.router,
        "PUT",
        "/api/mock-items/99999999999",
        Some(json!({ "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Not found" }));

    let (status, body) =
        send_json(&app.router, "DELETE", "/api/mock-items/99999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");

    // A stored row with a 64-bit id can be updated and deleted
    let large_id: i64 = 3_000_000_000;
    ActiveModel {
        id: Set(large_id),
        name: Set("Far away".to_string()),
        description: Set(String::new()),
        created_at: Set(Utc::now()),
    }
    .insert(&app.db)
    .await
    .unwrap();

    let (status, updated) = send_json(
        &app.router,
        "PUT",
        &format!("/api/mock-items/{large_id}"),
        Some(json!({ "name": "Closer" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "Failed to update: {updated:?}");
    assert_eq!(updated["id"], large_id);
    assert_eq!(updated["name"], "Closer");

    let (status, _) = send_json(
        &app.router,
        "DELETE",
        &format!("/api/mock-items/{large_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_create_without_content_type_is_bad_request() {
    let app = setup_test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/mock-items")
                .body(Body::from(json!({ "name": "No header" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request payload");
    assert!(body["details"].is_string());
    assert!(list_items(&app).await.is_empty());
}

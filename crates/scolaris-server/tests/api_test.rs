//! End-to-end tests for the HTTP surface against an in-memory store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use scolaris_server::routes;
use scolaris_server::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Helper: build the full router over a fresh in-memory database.
async fn app() -> Router {
    let db = surrealdb::engine::any::connect("mem://").await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    scolaris_db::run_migrations(&db).await.unwrap();
    routes::router(AppState::new(db))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_school(app: &Router, name: &str, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/schools",
        Some(json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn category_lifecycle_end_to_end() {
    let app = app().await;
    let school_id = create_school(&app, "Hillside Primary", "office@hillside.example").await;

    // Create: 201, active defaults true, secondary id populated.
    let (status, body) = send(
        &app,
        "POST",
        "/categories",
        Some(json!({
            "name": "Stationery",
            "description": "Office supplies",
            "school_id": school_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "category created");
    assert_eq!(body["data"]["active"], true);
    assert!(!body["data"]["category_id"].as_str().unwrap().is_empty());
    let category_id = body["data"]["id"].as_str().unwrap().to_string();

    // List: 200, count 1, the new record first.
    let (status, body) = send(&app, "GET", &format!("/categories/{school_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Stationery");

    // Delete: 200, message-only envelope.
    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/categories/{category_id}?school_id={school_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "category deleted");
    assert!(body.get("data").is_none());

    // Listing is empty again.
    let (status, body) = send(&app, "GET", &format!("/categories/{school_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn malformed_tenant_id_is_rejected_on_every_operation() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/categories/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid identifier: not-an-id");

    let (status, _) = send(
        &app,
        "POST",
        "/categories",
        Some(json!({
            "name": "Books",
            "description": "Library stock",
            "school_id": "not-an-id",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let resource_id = uuid::Uuid::new_v4();
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/categories/{resource_id}"),
        Some(json!({ "school_id": "not-an-id", "description": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/categories/{resource_id}?school_id=not-an-id"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_required_field_reported_before_bad_tenant_id() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/categories",
        Some(json!({ "description": "no name", "school_id": "not-an-id" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required field: name");
}

#[tokio::test]
async fn duplicate_category_name_is_400_with_message() {
    let app = app().await;
    let school_id = create_school(&app, "Hillside Primary", "office@hillside.example").await;

    let payload = json!({
        "name": "Books",
        "description": "Library stock",
        "school_id": school_id,
    });
    let (status, _) = send(&app, "POST", "/categories", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/categories", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Duplicate category name");
}

#[tokio::test]
async fn cross_tenant_access_is_indistinguishable_from_not_found() {
    let app = app().await;
    let school_a = create_school(&app, "Hillside Primary", "office@hillside.example").await;
    let school_b = create_school(&app, "Riverside Academy", "office@riverside.example").await;

    let (_, body) = send(
        &app,
        "POST",
        "/categories",
        Some(json!({
            "name": "Stationery",
            "description": "Office supplies",
            "school_id": school_a,
        })),
    )
    .await;
    let category_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/categories/{category_id}"),
        Some(json!({ "school_id": school_b, "description": "hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    // The failure reveals nothing about the foreign record.
    assert!(body.get("data").is_none());

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/categories/{category_id}?school_id={school_b}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_applies_merge_patch_over_http() {
    let app = app().await;
    let school_id = create_school(&app, "Hillside Primary", "office@hillside.example").await;

    let (_, body) = send(
        &app,
        "POST",
        "/subjects",
        Some(json!({
            "name": "Physics",
            "code": "PHY-101",
            "kind": "Theory",
            "school_id": school_id,
        })),
    )
    .await;
    let subject_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["sessions"], 0);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/subjects/{subject_id}"),
        Some(json!({ "school_id": school_id, "sessions": 12 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sessions"], 12);
    assert_eq!(body["data"]["name"], "Physics"); // untouched
    assert_eq!(body["data"]["kind"], "Theory"); // untouched
}

#[tokio::test]
async fn stock_item_numeric_bounds_enforced_over_http() {
    let app = app().await;
    let school_id = create_school(&app, "Hillside Primary", "office@hillside.example").await;

    let (status, body) = send(
        &app,
        "POST",
        "/stock-items",
        Some(json!({
            "item_name": "Whiteboard markers",
            "category": "Stationery",
            "supplier": "OfficeMart",
            "quantity": -3,
            "purchase_price": 35.0,
            "purchase_date": "2024-02-10T09:00:00Z",
            "school_id": school_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Invalid value for quantity: must be a non-negative integer"
    );

    // Nothing was persisted by the rejected create.
    let (_, body) = send(&app, "GET", &format!("/stock-items/{school_id}"), None).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn unknown_school_fetch_is_404() {
    let app = app().await;
    let (status, _) = send(
        &app,
        "GET",
        &format!("/schools/{}", uuid::Uuid::new_v4()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

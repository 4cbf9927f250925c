//! Dispatch-contract tests against a canned in-process server.
//!
//! The canned server speaks the envelope protocol; the tests observe
//! the store's state transitions, the refetch-after-mutation sequence,
//! and error-message extraction.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use scolaris_client::{ApiClient, FetchState, ResourceStore};
use scolaris_core::models::category::{Category, CreateCategoryPayload};
use serde_json::{Value, json};
use uuid::Uuid;

#[derive(Clone, Default)]
struct Canned {
    items: Arc<Mutex<Vec<Value>>>,
}

fn category_record(school_id: Uuid, name: &str) -> Value {
    let now = Utc::now().to_rfc3339();
    json!({
        "id": Uuid::new_v4(),
        "school_id": school_id,
        "category_id": Uuid::new_v4(),
        "name": name,
        "description": format!("{name} supplies"),
        "active": true,
        "created_at": now,
        "updated_at": now,
    })
}

async fn list_handler(State(canned): State<Canned>, Path(_school): Path<String>) -> Json<Value> {
    let items = canned.items.lock().unwrap().clone();
    Json(json!({
        "message": "category list retrieved",
        "data": items,
        "count": items.len(),
    }))
}

async fn create_handler(
    State(canned): State<Canned>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if payload["name"] == "Dup" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Duplicate category name" })),
        );
    }
    let school_id: Uuid = payload["school_id"].as_str().unwrap().parse().unwrap();
    let record = category_record(school_id, payload["name"].as_str().unwrap());
    canned.items.lock().unwrap().push(record.clone());
    (
        StatusCode::CREATED,
        Json(json!({ "message": "category created", "data": record })),
    )
}

/// Bind an ephemeral port, serve the canned router, return the base URL.
async fn serve(canned: Canned) -> String {
    let app = Router::new()
        .route("/categories", post(create_handler))
        .route("/categories/{school_id}", get(list_handler))
        .with_state(canned);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn refresh_moves_idle_to_succeeded() {
    let school_id = Uuid::new_v4();
    let canned = Canned::default();
    canned
        .items
        .lock()
        .unwrap()
        .push(category_record(school_id, "Stationery"));
    let base = serve(canned).await;

    let mut store: ResourceStore<Category> = ResourceStore::new(ApiClient::new(base), school_id);
    assert!(matches!(store.items(), FetchState::Idle));

    store.refresh().await;

    let items = store.items().data().expect("listing should have loaded");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Stationery");
}

#[tokio::test]
async fn successful_create_refetches_the_listing() {
    let school_id = Uuid::new_v4();
    let base = serve(Canned::default()).await;

    let mut store: ResourceStore<Category> = ResourceStore::new(ApiClient::new(base), school_id);

    let created = store
        .create(CreateCategoryPayload {
            school_id: Some(school_id.to_string()),
            name: Some("Books".into()),
            description: Some("Library stock".into()),
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Books");

    // The follow-up refetch ran after the mutation was observed.
    assert_eq!(*store.last_mutation(), FetchState::Succeeded(()));
    let items = store.items().data().expect("listing refreshed");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Books");
}

#[tokio::test]
async fn failed_create_extracts_envelope_message_and_keeps_listing() {
    let school_id = Uuid::new_v4();
    let base = serve(Canned::default()).await;

    let mut store: ResourceStore<Category> = ResourceStore::new(ApiClient::new(base), school_id);
    store.refresh().await;
    let before_len = store.items().data().map(Vec::len);

    let err = store
        .create(CreateCategoryPayload {
            school_id: Some(school_id.to_string()),
            name: Some("Dup".into()),
            description: Some("second copy".into()),
        })
        .await
        .unwrap_err();

    // The server's envelope message is surfaced verbatim.
    assert_eq!(err.message, "Duplicate category name");
    assert_eq!(
        *store.last_mutation(),
        FetchState::Failed("Duplicate category name".into())
    );
    // No refetch after a failed mutation.
    assert_eq!(store.items().data().map(Vec::len), before_len);
}

#[tokio::test]
async fn transport_failure_falls_back_to_transport_message() {
    // Bind then drop a listener so the port is closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut store: ResourceStore<Category> =
        ResourceStore::new(ApiClient::new(format!("http://{addr}")), Uuid::new_v4());
    store.refresh().await;

    let message = store.items().error().expect("refresh should have failed");
    assert!(!message.is_empty());
}

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use backend_application::testing::{InMemoryBackend, StaticHealth};
use backend_application::AppState;
use backend_domain::ports::ItemRepository;
use backend_domain::{ItemFields, ItemFilter, ItemRecord, NewItem, RecordId};
use backend_interfaces_http::{build_router, INTERNAL_ERROR_MESSAGE};

const UNKNOWN_ID: &str = "65a1f0c2b3d4e5f607182930";

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = router
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };
    (status, value)
}

fn widget(quantity: i64, expiry: &str) -> Value {
    json!({
        "name": "A",
        "email": "a@x.com",
        "item_name": "Widget",
        "quantity": quantity,
        "expiry_date": expiry,
    })
}

async fn create_item(router: &Router, body: Value) -> String {
    let (status, value) = send(router, Method::POST, "/items", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    value["id"].as_str().expect("id").to_string()
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let router = build_router(InMemoryBackend::new().state);
    let (status, body) = send(&router, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().starts_with("Welcome"));
}

#[tokio::test]
async fn item_round_trip() {
    let router = build_router(InMemoryBackend::new().state);
    let id = create_item(&router, widget(3, "2025-01-01")).await;

    let (status, body) = send(&router, Method::GET, &format!("/items/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["_id"], id);
    assert_eq!(body["quantity"], 3);
    assert_eq!(body["expiry_date"], "2025-01-01T00:00:00Z");
    assert!(body["insert_date"].is_string());
}

#[tokio::test]
async fn create_ignores_caller_insert_date() {
    let backend = InMemoryBackend::new();
    let router = build_router(backend.state.clone());
    let mut body = widget(1, "2025-01-01");
    body["insert_date"] = json!("1999-01-01T00:00:00Z");
    create_item(&router, body).await;

    let stored = &backend.items.records().await[0];
    assert_ne!(stored.insert_date.format("%Y").to_string(), "1999");
}

#[tokio::test]
async fn malformed_ids_are_rejected_for_every_by_id_route() {
    // an unavailable store proves the request never got that far
    let router = build_router(InMemoryBackend::unavailable().state);
    for raw in ["123", "not-an-object-id", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
        let cases = [
            (Method::GET, format!("/items/{raw}"), None, "Invalid item ID format"),
            (Method::PUT, format!("/items/{raw}"), Some(widget(1, "2025-01-01")), "Invalid item ID format"),
            (Method::DELETE, format!("/items/{raw}"), None, "Invalid item ID format"),
            (Method::GET, format!("/clock-in/{raw}"), None, "Invalid clock-in ID format"),
            (Method::PUT, format!("/clock-in/{raw}"), Some(json!({"email": "b@x.com"})), "Invalid clock-in ID format"),
            (Method::DELETE, format!("/clock-in/{raw}"), None, "Invalid clock-in ID format"),
        ];
        for (method, uri, body, message) in cases {
            let (status, value) = send(&router, method, &uri, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(value["error"], message);
        }
    }
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let router = build_router(InMemoryBackend::new().state);
    let cases = [
        (Method::GET, format!("/items/{UNKNOWN_ID}"), None),
        (Method::PUT, format!("/items/{UNKNOWN_ID}"), Some(widget(1, "2025-01-01"))),
        (Method::DELETE, format!("/items/{UNKNOWN_ID}"), None),
        (Method::GET, format!("/clock-in/{UNKNOWN_ID}"), None),
        (Method::PUT, format!("/clock-in/{UNKNOWN_ID}"), Some(json!({"location": "Gate 2"}))),
        (Method::DELETE, format!("/clock-in/{UNKNOWN_ID}"), None),
    ];
    for (method, uri, body) in cases {
        let (status, _) = send(&router, method, &uri, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn item_update_and_delete() {
    let router = build_router(InMemoryBackend::new().state);
    let id = create_item(&router, widget(3, "2025-01-01")).await;

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/items/{id}"),
        Some(json!({
            "name": "B",
            "email": "b@x.com",
            "item_name": "Gadget",
            "quantity": 7,
            "expiry_date": "2026-06-30",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item updated successfully");

    let (_, record) = send(&router, Method::GET, &format!("/items/{id}"), None).await;
    assert_eq!(record["name"], "B");
    assert_eq!(record["item_name"], "Gadget");
    assert_eq!(record["expiry_date"], "2026-06-30T00:00:00Z");

    let (status, body) = send(&router, Method::DELETE, &format!("/items/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item deleted successfully");
    let (status, _) = send(&router, Method::GET, &format!("/items/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn item_update_requires_every_field() {
    let router = build_router(InMemoryBackend::new().state);
    let id = create_item(&router, widget(3, "2025-01-01")).await;
    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/items/{id}"),
        Some(json!({"quantity": 9})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn filter_items_by_query_string() {
    let router = build_router(InMemoryBackend::new().state);
    create_item(&router, widget(4, "2024-01-01")).await;
    create_item(&router, widget(5, "2024-01-02")).await;
    create_item(&router, widget(9, "2025-03-01")).await;

    let (status, body) = send(&router, Method::GET, "/items/filter?quantity=5", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("list");
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item["quantity"].as_i64().unwrap() >= 5));

    let (status, body) = send(&router, Method::GET, "/items/filter?expiry_date=2024-01-01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&router, Method::GET, "/items/filter?email=b@x.com", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No items found matching the criteria");

    let (status, body) = send(&router, Method::GET, "/items/filter", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn filter_rejects_bad_id_and_reports_empty_collection() {
    let router = build_router(InMemoryBackend::new().state);
    let (status, body) = send(&router, Method::GET, "/items/filter", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No items found matching the criteria");

    let (status, body) = send(&router, Method::GET, "/items/filter?id=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid item ID format");

    let (status, _) = send(&router, Method::GET, "/items/filter?quantity=many", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn clock_in_partial_update_keeps_other_fields() {
    let backend = InMemoryBackend::new();
    let router = build_router(backend.state.clone());
    let (status, body) = send(
        &router,
        Method::POST,
        "/clock-in",
        Some(json!({"email": "a@x.com", "location": "Dock 4"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().unwrap().to_string();
    let stamped = backend.clock_ins.records().await[0].insert_date_time;

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/clock-in/{id}"),
        Some(json!({"location": "Gate 2"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Clock-in record updated successfully");

    let (status, record) = send(&router, Method::GET, &format!("/clock-in/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["_id"], id);
    assert_eq!(record["email"], "a@x.com");
    assert_eq!(record["location"], "Gate 2");
    assert_eq!(backend.clock_ins.records().await[0].insert_date_time, stamped);

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/clock-in/{id}"),
        Some(json!({"location": "Gate 2"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Clock-in record not found or no changes made");

    let (status, body) = send(&router, Method::DELETE, &format!("/clock-in/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Clock-in record deleted successfully");
}

#[tokio::test]
async fn store_failure_is_a_generic_500() {
    let router = build_router(InMemoryBackend::unavailable().state);
    let (status, body) = send(&router, Method::POST, "/items", Some(widget(1, "2025-01-01"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
    assert!(!body.to_string().contains("27017"));

    let (status, _) = send(&router, Method::GET, "/items/filter", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

struct PanickingItemRepository;

#[async_trait]
impl ItemRepository for PanickingItemRepository {
    async fn insert_item(&self, _item: &NewItem) -> anyhow::Result<RecordId> {
        panic!("driver state corrupted at 0xdeadbeef");
    }

    async fn find_item(&self, _id: &RecordId) -> anyhow::Result<Option<ItemRecord>> {
        panic!("driver state corrupted at 0xdeadbeef");
    }

    async fn find_items(&self, _filter: &ItemFilter) -> anyhow::Result<Vec<ItemRecord>> {
        panic!("driver state corrupted at 0xdeadbeef");
    }

    async fn replace_item(&self, _id: &RecordId, _fields: &ItemFields) -> anyhow::Result<u64> {
        panic!("driver state corrupted at 0xdeadbeef");
    }

    async fn delete_item(&self, _id: &RecordId) -> anyhow::Result<u64> {
        panic!("driver state corrupted at 0xdeadbeef");
    }
}

#[tokio::test]
async fn panics_are_caught_without_leaking_details() {
    let mut state: AppState = InMemoryBackend::new().state;
    state.item_repo = Arc::new(PanickingItemRepository);
    let router = build_router(state);

    let (status, body) = send(&router, Method::GET, &format!("/items/{UNKNOWN_ID}"), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
    assert!(!body.to_string().contains("deadbeef"));
}

#[tokio::test]
async fn health_and_metrics() {
    let router = build_router(InMemoryBackend::new().state);
    let (status, _) = send(&router, Method::GET, "/ops/health/live", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&router, Method::GET, "/ops/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);

    create_item(&router, widget(1, "2025-01-01")).await;
    let (status, body) = send(&router, Method::GET, "/ops/metrics/prometheus", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().unwrap().contains("stockroom_records_created_total 1\n"));

    let down = AppState {
        health: Arc::new(StaticHealth(false)),
        ..InMemoryBackend::new().state
    };
    let (status, _) = send(&build_router(down), Method::GET, "/ops/health/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

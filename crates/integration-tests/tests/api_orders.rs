//! Integration tests for the order endpoints.
//!
//! These tests require:
//! - A running MongoDB instance
//! - The API server running (cargo run -p orderdesk-api)
//!
//! Run with: cargo test -p orderdesk-integration-tests -- --ignored

use mongodb::bson::oid::ObjectId;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
fn base_url() -> String {
    std::env::var("ORDERDESK_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Test helper: Create a customer via API, returning its id.
async fn create_test_customer(client: &Client) -> String {
    let base_url = base_url();
    let resp = client
        .post(format!("{base_url}/api/customers"))
        .json(&json!({
            "name": "Integration Test",
            "email": format!("customer-{}@example.com", Uuid::new_v4()),
        }))
        .send()
        .await
        .expect("Failed to create test customer");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    body["id"]
        .as_str()
        .expect("id should be a string")
        .to_owned()
}

/// Test helper: Create an order via API, returning the response body.
async fn create_test_order(client: &Client, customer_id: &str) -> Value {
    let base_url = base_url();
    let resp = client
        .post(format!("{base_url}/api/orders"))
        .json(&json!({"customer_id": customer_id, "item": "widget", "amount": 9.99}))
        .send()
        .await
        .expect("Failed to create test order");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse response")
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_order_create() {
    let client = Client::new();
    let customer_id = create_test_customer(&client).await;

    let body = create_test_order(&client, &customer_id).await;

    assert_eq!(body["customer_id"], json!(customer_id));
    assert_eq!(body["item"], "widget");
    assert_eq!(body["amount"], json!(9.99));
    assert!(body["id"].is_string());
}

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_order_create_accepts_numeric_string_amount() {
    let client = Client::new();
    let base_url = base_url();
    let customer_id = create_test_customer(&client).await;

    let resp = client
        .post(format!("{base_url}/api/orders"))
        .json(&json!({"customer_id": customer_id, "item": "widget", "amount": "12.50"}))
        .send()
        .await
        .expect("Failed to create order");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["amount"], json!(12.5));
}

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_order_create_malformed_customer_id() {
    let client = Client::new();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/orders"))
        .json(&json!({"customer_id": "not-an-id", "item": "widget", "amount": 1.0}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"error": "invalid customer_id"}));
}

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_order_create_unknown_customer() {
    let client = Client::new();
    let base_url = base_url();
    let fake_id = ObjectId::new().to_hex();

    let resp = client
        .post(format!("{base_url}/api/orders"))
        .json(&json!({"customer_id": fake_id, "item": "widget", "amount": 1.0}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"error": "customer not found"}));
}

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_order_create_validation_reports_every_field() {
    let client = Client::new();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/orders"))
        .json(&json!({"amount": true}))
        .send()
        .await
        .expect("Failed to send invalid request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"].as_array().expect("details").len(), 3);
}

// ============================================================================
// Fetch, List & Delete Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_order_lifecycle() {
    let client = Client::new();
    let base_url = base_url();
    let customer_id = create_test_customer(&client).await;

    let created = create_test_order(&client, &customer_id).await;
    let order_id = created["id"].as_str().expect("id should be a string");

    // Listed
    let resp = client
        .get(format!("{base_url}/api/orders"))
        .send()
        .await
        .expect("Failed to list orders");
    assert_eq!(resp.status(), StatusCode::OK);
    let orders: Vec<Value> = resp.json().await.expect("Failed to parse response");
    assert!(orders.iter().any(|order| order["id"] == json!(order_id)));

    // Fetched by id, identical to the creation response
    let resp = client
        .get(format!("{base_url}/api/orders/{order_id}"))
        .send()
        .await
        .expect("Failed to fetch order");
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);

    // Deleted
    let resp = client
        .delete(format!("{base_url}/api/orders/{order_id}"))
        .send()
        .await
        .expect("Failed to delete order");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Gone
    let resp = client
        .get(format!("{base_url}/api/orders/{order_id}"))
        .send()
        .await
        .expect("Failed to fetch deleted order");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // A second delete also reports not-found
    let resp = client
        .delete(format!("{base_url}/api/orders/{order_id}"))
        .send()
        .await
        .expect("Failed to re-delete order");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_order_fetch_malformed_and_unknown_id() {
    let client = Client::new();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/api/orders/zzz"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"error": "invalid id"}));

    let fake_id = ObjectId::new().to_hex();
    let resp = client
        .get(format!("{base_url}/api/orders/{fake_id}"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"error": "not found"}));
}

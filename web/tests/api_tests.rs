//! End-to-end tests for the HTTP surface.
//!
//! These run the full router — gate middleware, handlers, error mapping —
//! over the in-memory backend, exercising the same boundary contract the
//! browser client consumes.

#![allow(clippy::unwrap_used)]

use axum_test::{TestServer, TestServerConfig};
use chrono::Duration;
use serde_json::{json, Value};
use shirtstock_auth::{AuthState, MemoryCredentialStore, MemorySessionStore, UserCredential};
use shirtstock_storage::MemoryRecordStore;
use shirtstock_web::{app_router, AppState};

fn server() -> TestServer {
    let gate = AuthState::new(
        MemorySessionStore::new(),
        MemoryCredentialStore::new([UserCredential::new("amy", "hunter2")]),
        Duration::hours(24),
    );
    let app = app_router(AppState::new(MemoryRecordStore::new()), gate);
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app, config).unwrap()
}

async fn login(server: &TestServer) {
    server
        .post("/api/login")
        .json(&json!({"username": "amy", "password": "hunter2"}))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn health_is_open() {
    let server = server();
    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn inventory_requires_a_session() {
    let server = server();
    server.get("/api/tshirts").await.assert_status_unauthorized();
    server
        .post("/api/tshirts")
        .json(&json!({"size": "M", "color": "Red", "quantity": 1}))
        .await
        .assert_status_unauthorized();
    server
        .delete("/api/tshirts/00000000-0000-0000-0000-000000000000")
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn full_record_lifecycle() {
    let server = server();
    login(&server).await;

    // Create.
    let created = server
        .post("/api/tshirts")
        .json(&json!({"size": "M", "color": "Red", "quantity": 5}))
        .await;
    created.assert_status(http::StatusCode::CREATED);
    let record: Value = created.json();
    let id = record["id"].as_str().unwrap().to_string();
    assert_eq!(record["quantity"], 5);

    // Duplicate (color, size) conflicts.
    let duplicate = server
        .post("/api/tshirts")
        .json(&json!({"size": "M", "color": "Red", "quantity": 9}))
        .await;
    duplicate.assert_status(http::StatusCode::CONFLICT);
    let body: Value = duplicate.json();
    assert_eq!(body["code"], "CONFLICT");

    // Update to quantity 0, identity preserved.
    let updated = server
        .put(&format!("/api/tshirts/{id}"))
        .json(&json!({"size": "M", "color": "Red", "quantity": 0}))
        .await;
    updated.assert_status_ok();
    let body: Value = updated.json();
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["quantity"], 0);

    // Delete, then the record is gone.
    server
        .delete(&format!("/api/tshirts/{id}"))
        .await
        .assert_status(http::StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/tshirts/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn list_reflects_successful_mutations() {
    let server = server();
    login(&server).await;

    let empty: Vec<Value> = server.get("/api/tshirts").await.json();
    assert!(empty.is_empty());

    server
        .post("/api/tshirts")
        .json(&json!({"size": "L", "color": "Blue", "quantity": 3}))
        .await
        .assert_status(http::StatusCode::CREATED);

    let records: Vec<Value> = server.get("/api/tshirts").await.json();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["color"], "Blue");
}

#[tokio::test]
async fn failed_create_leaves_the_list_unchanged() {
    let server = server();
    login(&server).await;

    server
        .post("/api/tshirts")
        .json(&json!({"size": "M", "color": "Red", "quantity": -2}))
        .await
        .assert_status_bad_request();

    let records: Vec<Value> = server.get("/api/tshirts").await.json();
    assert!(records.is_empty());
}

#[tokio::test]
async fn validation_errors_carry_field_detail() {
    let server = server();
    login(&server).await;

    let response = server
        .post("/api/tshirts")
        .json(&json!({"size": "M", "color": "Red", "quantity": -1}))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["field"], "quantity");

    let response = server
        .post("/api/tshirts")
        .json(&json!({"size": "", "color": "Red", "quantity": 1}))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["field"], "size");
}

#[tokio::test]
async fn quantity_defaults_to_zero_when_omitted() {
    let server = server();
    login(&server).await;

    let response = server
        .post("/api/tshirts")
        .json(&json!({"size": "S", "color": "Green"}))
        .await;
    response.assert_status(http::StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["quantity"], 0);
}

#[tokio::test]
async fn update_cannot_change_identity() {
    let server = server();
    login(&server).await;

    let created: Value = server
        .post("/api/tshirts")
        .json(&json!({"size": "M", "color": "Red", "quantity": 1}))
        .await
        .json();
    let id = created["id"].as_str().unwrap().to_string();

    // An id in the payload is ignored.
    let updated: Value = server
        .put(&format!("/api/tshirts/{id}"))
        .json(&json!({
            "id": "11111111-1111-1111-1111-111111111111",
            "size": "M",
            "color": "Red",
            "quantity": 2
        }))
        .await
        .json();
    assert_eq!(updated["id"], id.as_str());
}

#[tokio::test]
async fn unknown_and_malformed_ids_are_404() {
    let server = server();
    login(&server).await;

    server
        .get("/api/tshirts/00000000-0000-0000-0000-000000000000")
        .await
        .assert_status_not_found();
    server.get("/api/tshirts/not-a-uuid").await.assert_status_not_found();
    server
        .put("/api/tshirts/00000000-0000-0000-0000-000000000000")
        .json(&json!({"size": "M", "color": "Red", "quantity": 1}))
        .await
        .assert_status_not_found();
    server
        .delete("/api/tshirts/00000000-0000-0000-0000-000000000000")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn logout_closes_the_gate_again() {
    let server = server();
    login(&server).await;
    server.get("/api/tshirts").await.assert_status_ok();

    server
        .post("/api/logout")
        .await
        .assert_status(http::StatusCode::NO_CONTENT);
    server.get("/api/tshirts").await.assert_status_unauthorized();
}

//! Common test utilities and helpers.

#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use chrono::{Duration, Local};
use serde_json::{json, Value};
use shareit::api;
use shareit::db::{self, DbPool};
use shareit::AppState;

/// Header name for the acting user.
pub fn sharer_header() -> HeaderName {
    HeaderName::from_static("x-sharer-user-id")
}

/// Header value naming user `id`.
pub fn sharer(id: i64) -> HeaderValue {
    HeaderValue::from_str(&id.to_string()).unwrap()
}

/// Fresh in-memory database with the schema applied.
pub async fn setup_test_db() -> DbPool {
    let pool = db::init_pool(":memory:")
        .await
        .expect("Failed to create test database");
    db::initialize_schema(&pool)
        .await
        .expect("Failed to initialize schema");
    pool
}

/// Full application behind an in-process test server.
pub async fn build_test_app() -> (TestServer, DbPool) {
    let pool = setup_test_db().await;
    let app = api::app(AppState::with_pool(pool.clone()));
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, pool)
}

/// Local wall-clock time shifted by `offset`, in wire format.
pub fn at(offset: Duration) -> String {
    (Local::now().naive_local() + offset)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

pub async fn create_user(server: &TestServer, name: &str, email: &str) -> i64 {
    let response = server
        .post("/users")
        .json(&json!({ "name": name, "email": email }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["id"].as_i64().unwrap()
}

pub async fn create_item(server: &TestServer, owner: i64, name: &str, description: &str) -> i64 {
    let response = server
        .post("/items")
        .add_header(sharer_header(), sharer(owner))
        .json(&json!({
            "name": name,
            "description": description,
            "available": true
        }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["id"].as_i64().unwrap()
}

pub async fn create_booking(server: &TestServer, booker: i64, item: i64) -> Value {
    let response = server
        .post("/bookings")
        .add_header(sharer_header(), sharer(booker))
        .json(&json!({
            "itemId": item,
            "start": at(Duration::days(1)),
            "end": at(Duration::days(2))
        }))
        .await;
    response.assert_status_ok();
    response.json()
}

//! Common test utilities for the gateway.

#![allow(dead_code)]

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use chrono::Local;
use shareit_gateway::{api, GatewayState, ServerClient};
use wiremock::MockServer;

/// Header name for the acting user.
pub fn sharer_header() -> HeaderName {
    HeaderName::from_static("x-sharer-user-id")
}

/// Header value naming user `id`.
pub fn sharer(id: i64) -> HeaderValue {
    HeaderValue::from_str(&id.to_string()).unwrap()
}

/// Gateway relaying to `upstream_url`.
pub fn build_gateway(upstream_url: &str) -> TestServer {
    let client = ServerClient::new(upstream_url, Duration::from_secs(5))
        .expect("Failed to build upstream client");
    let app = api::app(GatewayState::with_client(client));
    TestServer::new(app).expect("Failed to create test server")
}

/// Gateway in front of a fresh mock server.
pub async fn gateway_with_mock() -> (TestServer, MockServer) {
    let upstream = MockServer::start().await;
    let gateway = build_gateway(&upstream.uri());
    (gateway, upstream)
}

/// Wire timestamp `days` from now.
pub fn days_from_now(days: i64) -> String {
    (Local::now().naive_local() + chrono::Duration::days(days))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

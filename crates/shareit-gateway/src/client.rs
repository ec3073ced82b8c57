//! HTTP client for the ShareIt server.
//!
//! Requests that passed validation are relayed with the same path, query,
//! caller header and body. The server's status, content type and body come
//! back unchanged.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header::CONTENT_TYPE, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use reqwest::Method;
use shareit_models::{Id, SHARER_HEADER};
use tracing::debug;

use crate::error::Result;

/// Relays validated requests to the ShareIt server.
#[derive(Clone)]
pub struct ServerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServerClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Server base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `method uri` upstream and turn the reply into a response.
    pub async fn relay(
        &self,
        method: Method,
        uri: &Uri,
        sharer: Option<Id>,
        body: Option<Bytes>,
    ) -> Result<Response> {
        let path = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(id) = sharer {
            request = request.header(SHARER_HEADER, id.to_string());
        }
        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let upstream = request.send().await?;
        let status =
            StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = upstream
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| HeaderValue::from_str(v).ok());
        let bytes = upstream.bytes().await?;

        debug!(%method, path, status = status.as_u16(), "Relayed request");

        let mut response = (status, bytes).into_response();
        match content_type {
            Some(value) => {
                response.headers_mut().insert(CONTENT_TYPE, value);
            }
            None => {
                response.headers_mut().remove(CONTENT_TYPE);
            }
        }
        Ok(response)
    }
}

//! Item-request relay.

use axum::{
    body::Bytes,
    extract::{OriginalUri, Path, Query, State},
    response::Response,
    routing::get,
    Extension, Router,
};
use reqwest::Method;
use shareit_models::{validate, Id, NewItemRequest, PageQuery};
use tracing::info;

use crate::{error::Result, middleware::SharerId, GatewayState};

pub fn routes() -> Router<GatewayState> {
    Router::new()
        .route("/", get(list_own_requests).post(create_request))
        .route("/all", get(list_other_requests))
        .route("/:id", get(get_request))
}

async fn list_own_requests(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response> {
    state.client.relay(Method::GET, &uri, Some(user_id), None).await
}

async fn create_request(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> Result<Response> {
    let request: NewItemRequest = serde_json::from_slice(&body)?;
    validate::new_item_request(&request)?;
    info!(user_id, "Relaying item request");
    state
        .client
        .relay(Method::POST, &uri, Some(user_id), Some(body))
        .await
}

async fn list_other_requests(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    query.page()?;
    state.client.relay(Method::GET, &uri, Some(user_id), None).await
}

async fn get_request(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    Path(_id): Path<Id>,
) -> Result<Response> {
    state.client.relay(Method::GET, &uri, Some(user_id), None).await
}

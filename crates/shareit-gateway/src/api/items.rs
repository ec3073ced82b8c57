//! Item catalog relay.

use axum::{
    body::Bytes,
    extract::{OriginalUri, Path, Query, State},
    response::Response,
    routing::{get, post},
    Extension, Router,
};
use reqwest::Method;
use shareit_models::{validate, Id, ItemPatch, NewComment, NewItem, PageQuery, SearchQuery};
use tracing::info;

use crate::{error::Result, middleware::SharerId, GatewayState};

pub fn routes() -> Router<GatewayState> {
    Router::new()
        .route("/", get(list_own_items).post(create_item))
        .route("/search", get(search_items))
        .route("/:id", get(get_item).patch(update_item))
        .route("/:id/comment", post(create_comment))
}

async fn list_own_items(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    query.page()?;
    state.client.relay(Method::GET, &uri, Some(user_id), None).await
}

async fn create_item(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> Result<Response> {
    let item: NewItem = serde_json::from_slice(&body)?;
    validate::new_item(&item)?;
    info!(user_id, name = ?item.name, "Relaying item creation");
    state
        .client
        .relay(Method::POST, &uri, Some(user_id), Some(body))
        .await
}

async fn search_items(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<SearchQuery>,
) -> Result<Response> {
    query.page()?;
    state.client.relay(Method::GET, &uri, Some(user_id), None).await
}

async fn get_item(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    Path(_id): Path<Id>,
) -> Result<Response> {
    state.client.relay(Method::GET, &uri, Some(user_id), None).await
}

async fn update_item(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<Id>,
    body: Bytes,
) -> Result<Response> {
    let patch: ItemPatch = serde_json::from_slice(&body)?;
    validate::item_patch(&patch)?;
    info!(user_id, item_id = id, "Relaying item update");
    state
        .client
        .relay(Method::PATCH, &uri, Some(user_id), Some(body))
        .await
}

async fn create_comment(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<Id>,
    body: Bytes,
) -> Result<Response> {
    let comment: NewComment = serde_json::from_slice(&body)?;
    validate::new_comment(&comment)?;
    info!(user_id, item_id = id, "Relaying comment");
    state
        .client
        .relay(Method::POST, &uri, Some(user_id), Some(body))
        .await
}

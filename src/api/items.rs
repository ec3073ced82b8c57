//! Item catalog API endpoints.
//!
//! All routes require the `X-Sharer-User-Id` header.
//!
//! Routes:
//! - GET /items?from&size - The caller's items with bookings and comments
//! - POST /items - List a new item
//! - GET /items/search?text&from&size - Search available items
//! - GET /items/:id - Item page
//! - PATCH /items/:id - Partially update an owned item
//! - POST /items/:id/comment - Comment on a rented item

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use shareit_models::{
    validate, CommentDto, Id, ItemDto, ItemPatch, LongItemDto, NewComment, NewItem, PageQuery,
    SearchQuery,
};

use super::extract::{JsonBody, QueryParams};
use crate::{error::Result, middleware::SharerId, AppState};

// ============================================================================
// Routes
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_own_items).post(create_item))
        .route("/search", get(search_items))
        .route("/:id", get(get_item).patch(update_item))
        .route("/:id/comment", post(create_comment))
}

// ============================================================================
// Handlers
// ============================================================================

/// The caller's items, one page at a time.
async fn list_own_items(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<Json<Vec<LongItemDto>>> {
    let page = query.page()?;
    Ok(Json(state.items.list_long_by_owner(user_id, page).await?))
}

/// List a new item owned by the caller.
async fn create_item(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    JsonBody(body): JsonBody<NewItem>,
) -> Result<Json<ItemDto>> {
    let draft = validate::new_item(&body)?;
    Ok(Json(state.items.create(user_id, draft).await?))
}

/// Case-insensitive text search over available items.
async fn search_items(
    State(state): State<AppState>,
    Extension(SharerId(_)): Extension<SharerId>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Json<Vec<ItemDto>>> {
    let page = query.page()?;
    Ok(Json(state.items.search(&query.text, page).await?))
}

/// Item page; bookings are filled in for the owner only.
async fn get_item(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    Path(id): Path<Id>,
) -> Result<Json<LongItemDto>> {
    Ok(Json(state.items.get_long(id, user_id).await?))
}

/// Partially update an item the caller owns.
async fn update_item(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    Path(id): Path<Id>,
    JsonBody(patch): JsonBody<ItemPatch>,
) -> Result<Json<ItemDto>> {
    validate::item_patch(&patch)?;
    Ok(Json(state.items.update(user_id, id, patch).await?))
}

/// Comment on an item the caller has rented.
async fn create_comment(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    Path(id): Path<Id>,
    JsonBody(body): JsonBody<NewComment>,
) -> Result<Json<CommentDto>> {
    let text = validate::new_comment(&body)?;
    Ok(Json(state.items.add_comment(user_id, id, text).await?))
}

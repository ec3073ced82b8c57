//! Item-request API endpoints.
//!
//! All routes require the `X-Sharer-User-Id` header.
//!
//! Routes:
//! - GET /requests - The caller's requests
//! - POST /requests - Post a request
//! - GET /requests/all?from&size - Other users' requests
//! - GET /requests/:id - Get a request

use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};
use shareit_models::{validate, Id, ItemRequestDto, NewItemRequest, PageQuery};

use super::extract::{JsonBody, QueryParams};
use crate::{error::Result, middleware::SharerId, AppState};

// ============================================================================
// Routes
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_own_requests).post(create_request))
        .route("/all", get(list_other_requests))
        .route("/:id", get(get_request))
}

// ============================================================================
// Handlers
// ============================================================================

async fn list_own_requests(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
) -> Result<Json<Vec<ItemRequestDto>>> {
    Ok(Json(state.requests.list_own(user_id).await?))
}

async fn create_request(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    JsonBody(body): JsonBody<NewItemRequest>,
) -> Result<Json<ItemRequestDto>> {
    let description = validate::new_item_request(&body)?;
    Ok(Json(state.requests.create(user_id, description).await?))
}

async fn list_other_requests(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<Json<Vec<ItemRequestDto>>> {
    let page = query.page()?;
    Ok(Json(state.requests.list_others(user_id, page).await?))
}

async fn get_request(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    Path(id): Path<Id>,
) -> Result<Json<ItemRequestDto>> {
    Ok(Json(state.requests.get(user_id, id).await?))
}

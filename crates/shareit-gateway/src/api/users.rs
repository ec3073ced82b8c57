//! User directory relay.

use axum::{
    body::Bytes,
    extract::{OriginalUri, Path, State},
    response::Response,
    routing::get,
    Router,
};
use reqwest::Method;
use shareit_models::{validate, Id, NewUser, UserPatch};
use tracing::info;

use crate::{error::Result, GatewayState};

pub fn routes() -> Router<GatewayState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
}

async fn list_users(
    State(state): State<GatewayState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response> {
    state.client.relay(Method::GET, &uri, None, None).await
}

async fn create_user(
    State(state): State<GatewayState>,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> Result<Response> {
    let user: NewUser = serde_json::from_slice(&body)?;
    validate::new_user(&user)?;
    info!(email = ?user.email, "Relaying user registration");
    state.client.relay(Method::POST, &uri, None, Some(body)).await
}

async fn get_user(
    State(state): State<GatewayState>,
    OriginalUri(uri): OriginalUri,
    Path(_id): Path<Id>,
) -> Result<Response> {
    state.client.relay(Method::GET, &uri, None, None).await
}

async fn update_user(
    State(state): State<GatewayState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<Id>,
    body: Bytes,
) -> Result<Response> {
    let patch: UserPatch = serde_json::from_slice(&body)?;
    validate::user_patch(&patch)?;
    info!(user_id = id, "Relaying user update");
    state.client.relay(Method::PATCH, &uri, None, Some(body)).await
}

async fn delete_user(
    State(state): State<GatewayState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<Id>,
) -> Result<Response> {
    info!(user_id = id, "Relaying user deletion");
    state.client.relay(Method::DELETE, &uri, None, None).await
}

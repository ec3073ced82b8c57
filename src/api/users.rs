//! User directory API endpoints.
//!
//! Routes:
//! - GET /users - List all users
//! - POST /users - Register a user
//! - GET /users/:id - Get a user
//! - PATCH /users/:id - Partially update a user
//! - DELETE /users/:id - Delete a user

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use shareit_models::{validate, Id, NewUser, UserDto, UserPatch};

use super::extract::JsonBody;
use crate::{error::Result, AppState};

// ============================================================================
// Routes
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
}

// ============================================================================
// Handlers
// ============================================================================

/// List all users ordered by id.
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Register a new user.
async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewUser>,
) -> Result<Json<UserDto>> {
    let draft = validate::new_user(&body)?;
    let user = state.users.create(draft).await?;
    Ok(Json(user.into()))
}

/// Get a user by ID.
async fn get_user(State(state): State<AppState>, Path(id): Path<Id>) -> Result<Json<UserDto>> {
    let user = state.users.get(id).await?;
    Ok(Json(user.into()))
}

/// Update name and/or email.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    JsonBody(patch): JsonBody<UserPatch>,
) -> Result<Json<UserDto>> {
    validate::user_patch(&patch)?;
    let user = state.users.update(id, patch).await?;
    Ok(Json(user.into()))
}

/// Delete a user.
async fn delete_user(State(state): State<AppState>, Path(id): Path<Id>) -> Result<()> {
    state.users.delete(id).await
}

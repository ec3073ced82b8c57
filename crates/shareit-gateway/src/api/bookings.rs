//! Booking relay.

use axum::{
    body::Bytes,
    extract::{OriginalUri, Path, Query, State},
    response::Response,
    routing::get,
    Extension, Router,
};
use chrono::Local;
use reqwest::Method;
use shareit_models::{validate, ApprovalQuery, BookingsQuery, Id, NewBooking};
use tracing::info;

use crate::{error::Result, middleware::SharerId, GatewayState};

pub fn routes() -> Router<GatewayState> {
    Router::new()
        .route("/", get(list_booker_bookings).post(create_booking))
        .route("/owner", get(list_owner_bookings))
        .route("/:id", get(get_booking).patch(decide_booking))
}

async fn list_booker_bookings(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<BookingsQuery>,
) -> Result<Response> {
    query.state()?;
    query.page()?;
    state.client.relay(Method::GET, &uri, Some(user_id), None).await
}

async fn list_owner_bookings(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<BookingsQuery>,
) -> Result<Response> {
    query.state()?;
    query.page()?;
    state.client.relay(Method::GET, &uri, Some(user_id), None).await
}

async fn create_booking(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> Result<Response> {
    let booking: NewBooking = serde_json::from_slice(&body)?;
    let draft = validate::new_booking(&booking)?;
    validate::booking_window(draft.start, draft.end, Local::now().naive_local())?;
    info!(user_id, item_id = draft.item_id, "Relaying booking request");
    state
        .client
        .relay(Method::POST, &uri, Some(user_id), Some(body))
        .await
}

async fn get_booking(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    Path(_id): Path<Id>,
) -> Result<Response> {
    state.client.relay(Method::GET, &uri, Some(user_id), None).await
}

async fn decide_booking(
    State(state): State<GatewayState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<Id>,
    Query(query): Query<ApprovalQuery>,
) -> Result<Response> {
    info!(user_id, booking_id = id, approved = query.approved, "Relaying booking decision");
    state.client.relay(Method::PATCH, &uri, Some(user_id), None).await
}

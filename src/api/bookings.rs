//! Booking API endpoints.
//!
//! All routes require the `X-Sharer-User-Id` header.
//!
//! Routes:
//! - GET /bookings?state&from&size - Bookings the caller made
//! - GET /bookings/owner?state&from&size - Bookings of the caller's items
//! - POST /bookings - Request a booking
//! - GET /bookings/:id - Get a booking (booker or owner only)
//! - PATCH /bookings/:id?approved - Approve or reject (owner only)

use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};
use shareit_models::{validate, ApprovalQuery, BookingDto, BookingsQuery, Id, NewBooking};

use super::extract::{JsonBody, QueryParams};
use crate::{error::Result, middleware::SharerId, AppState};

// ============================================================================
// Routes
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_booker_bookings).post(create_booking))
        .route("/owner", get(list_owner_bookings))
        .route("/:id", get(get_booking).patch(decide_booking))
}

// ============================================================================
// Handlers
// ============================================================================

/// Bookings made by the caller, latest start first.
async fn list_booker_bookings(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    QueryParams(query): QueryParams<BookingsQuery>,
) -> Result<Json<Vec<BookingDto>>> {
    let booking_state = query.state()?;
    let page = query.page()?;
    Ok(Json(
        state
            .bookings
            .list_for_booker(user_id, booking_state, page)
            .await?,
    ))
}

/// Bookings of every item the caller owns, latest start first.
async fn list_owner_bookings(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    QueryParams(query): QueryParams<BookingsQuery>,
) -> Result<Json<Vec<BookingDto>>> {
    let booking_state = query.state()?;
    let page = query.page()?;
    Ok(Json(
        state
            .bookings
            .list_for_owner(user_id, booking_state, page)
            .await?,
    ))
}

/// Request a booking; it starts WAITING.
async fn create_booking(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    JsonBody(body): JsonBody<NewBooking>,
) -> Result<Json<BookingDto>> {
    let draft = validate::new_booking(&body)?;
    Ok(Json(state.bookings.create(user_id, draft).await?))
}

async fn get_booking(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    Path(id): Path<Id>,
) -> Result<Json<BookingDto>> {
    Ok(Json(state.bookings.get(id, user_id).await?))
}

/// Owner's one-time approve/reject decision.
async fn decide_booking(
    State(state): State<AppState>,
    Extension(SharerId(user_id)): Extension<SharerId>,
    Path(id): Path<Id>,
    QueryParams(query): QueryParams<ApprovalQuery>,
) -> Result<Json<BookingDto>> {
    Ok(Json(
        state.bookings.decide(id, user_id, query.approved).await?,
    ))
}

//! Booking database queries.

use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use shareit_models::{BookingState, BookingStatus, Id, Page};
use sqlx::{FromRow, QueryBuilder, Sqlite};

use super::{DbPool, Item, User};

// ============================================================================
// Booking Types
// ============================================================================

/// Booking record from the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Booking {
    pub id: Id,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub status: BookingStatus,
    pub item_id: Id,
    pub booker_id: Id,
}

/// Input for creating a booking.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub item_id: Id,
    pub booker_id: Id,
}

/// A booking together with its item and booker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub item: Item,
    pub booker: User,
}

/// Whose bookings a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingScope {
    /// Bookings made by this user.
    Booker(Id),
    /// Bookings of any item owned by this user.
    Owner(Id),
}

/// Flat row of the booking/item/user join.
#[derive(Debug, FromRow)]
struct BookingRow {
    id: Id,
    start_at: NaiveDateTime,
    end_at: NaiveDateTime,
    status: BookingStatus,
    item_id: Id,
    item_name: String,
    item_description: String,
    item_available: bool,
    item_owner_id: Id,
    item_request_id: Option<Id>,
    booker_id: Id,
    booker_name: String,
    booker_email: String,
}

impl From<BookingRow> for BookingDetails {
    fn from(row: BookingRow) -> Self {
        Self {
            booking: Booking {
                id: row.id,
                start_at: row.start_at,
                end_at: row.end_at,
                status: row.status,
                item_id: row.item_id,
                booker_id: row.booker_id,
            },
            item: Item {
                id: row.item_id,
                name: row.item_name,
                description: row.item_description,
                available: row.item_available,
                owner_id: row.item_owner_id,
                request_id: row.item_request_id,
            },
            booker: User {
                id: row.booker_id,
                name: row.booker_name,
                email: row.booker_email,
            },
        }
    }
}

const BOOKING_COLUMNS: &str = "id, start_at, end_at, status, item_id, booker_id";

const DETAILS_SELECT: &str = r#"
    SELECT b.id, b.start_at, b.end_at, b.status,
           i.id AS item_id, i.name AS item_name, i.description AS item_description,
           i.available AS item_available, i.owner_id AS item_owner_id,
           i.request_id AS item_request_id,
           u.id AS booker_id, u.name AS booker_name, u.email AS booker_email
    FROM bookings b
    JOIN items i ON i.id = b.item_id
    JOIN users u ON u.id = b.booker_id
"#;

// ============================================================================
// Booking Queries
// ============================================================================

/// Insert a WAITING booking if the item is currently available.
///
/// The availability test and the insert are one statement. Returns `None`
/// when the item is missing or unavailable.
pub async fn create_booking(pool: &DbPool, input: CreateBooking) -> Result<Option<Booking>> {
    let sql = format!(
        r#"
        INSERT INTO bookings (start_at, end_at, status, item_id, booker_id)
        SELECT ?, ?, ?, id, ? FROM items WHERE id = ? AND available = 1
        RETURNING {BOOKING_COLUMNS}
        "#
    );
    sqlx::query_as::<_, Booking>(&sql)
        .bind(input.start_at)
        .bind(input.end_at)
        .bind(BookingStatus::Waiting.as_str())
        .bind(input.booker_id)
        .bind(input.item_id)
        .fetch_optional(pool)
        .await
        .map_err(Error::from)
}

/// Get a booking with its item and booker.
pub async fn get_booking_details(pool: &DbPool, id: Id) -> Result<BookingDetails> {
    let sql = format!("{DETAILS_SELECT} WHERE b.id = ?");
    sqlx::query_as::<_, BookingRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .map(BookingDetails::from)
        .ok_or_else(|| Error::NotFound(format!("Booking {} not found", id)))
}

/// One page of bookings in `scope` matching `state`, latest start first.
pub async fn list_bookings(
    pool: &DbPool,
    scope: BookingScope,
    state: BookingState,
    now: NaiveDateTime,
    page: Page,
) -> Result<Vec<BookingDetails>> {
    let mut qb = QueryBuilder::<Sqlite>::new(DETAILS_SELECT);

    match scope {
        BookingScope::Booker(id) => {
            qb.push(" WHERE b.booker_id = ").push_bind(id);
        }
        BookingScope::Owner(id) => {
            qb.push(" WHERE i.owner_id = ").push_bind(id);
        }
    }

    match state {
        BookingState::All => {}
        BookingState::Current => {
            qb.push(" AND b.start_at <= ")
                .push_bind(now)
                .push(" AND b.end_at >= ")
                .push_bind(now);
        }
        BookingState::Past => {
            qb.push(" AND b.end_at < ").push_bind(now);
        }
        BookingState::Future => {
            qb.push(" AND b.start_at > ").push_bind(now);
        }
        BookingState::Waiting => {
            qb.push(" AND b.status = ")
                .push_bind(BookingStatus::Waiting.as_str());
        }
        BookingState::Rejected => {
            qb.push(" AND b.status = ")
                .push_bind(BookingStatus::Rejected.as_str());
        }
    }

    qb.push(" ORDER BY b.start_at DESC, b.id DESC LIMIT ")
        .push_bind(page.limit())
        .push(" OFFSET ")
        .push_bind(page.offset());

    let rows = qb.build_query_as::<BookingRow>().fetch_all(pool).await?;
    Ok(rows.into_iter().map(BookingDetails::from).collect())
}

/// Move a WAITING booking to `status`.
///
/// Returns false if the booking was no longer WAITING.
pub async fn decide_booking(pool: &DbPool, id: Id, status: BookingStatus) -> Result<bool> {
    let result = sqlx::query("UPDATE bookings SET status = ? WHERE id = ? AND status = ?")
        .bind(status.as_str())
        .bind(id)
        .bind(BookingStatus::Waiting.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}

/// Most recent WAITING or APPROVED booking of an item that has started.
pub async fn last_booking(pool: &DbPool, item_id: Id, now: NaiveDateTime) -> Result<Option<Booking>> {
    let sql = format!(
        r#"
        SELECT {BOOKING_COLUMNS} FROM bookings
        WHERE item_id = ? AND start_at <= ? AND status IN ('WAITING', 'APPROVED')
        ORDER BY start_at DESC, id DESC
        LIMIT 1
        "#
    );
    sqlx::query_as::<_, Booking>(&sql)
        .bind(item_id)
        .bind(now)
        .fetch_optional(pool)
        .await
        .map_err(Error::from)
}

/// Nearest WAITING or APPROVED booking of an item that has not started.
pub async fn next_booking(pool: &DbPool, item_id: Id, now: NaiveDateTime) -> Result<Option<Booking>> {
    let sql = format!(
        r#"
        SELECT {BOOKING_COLUMNS} FROM bookings
        WHERE item_id = ? AND start_at > ? AND status IN ('WAITING', 'APPROVED')
        ORDER BY start_at ASC, id ASC
        LIMIT 1
        "#
    );
    sqlx::query_as::<_, Booking>(&sql)
        .bind(item_id)
        .bind(now)
        .fetch_optional(pool)
        .await
        .map_err(Error::from)
}

/// Whether `booker_id` holds an APPROVED booking of the item that started before `now`.
pub async fn has_started_approved_booking(
    pool: &DbPool,
    item_id: Id,
    booker_id: Id,
    now: NaiveDateTime,
) -> Result<bool> {
    let found: Option<(Id,)> = sqlx::query_as(
        r#"
        SELECT id FROM bookings
        WHERE item_id = ? AND booker_id = ? AND status = 'APPROVED' AND start_at < ?
        LIMIT 1
        "#,
    )
    .bind(item_id)
    .bind(booker_id)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    Ok(found.is_some())
}

//! Booking ledger service.
//!
//! Bookings start WAITING and are approved or rejected exactly once by the
//! item's owner.

use shareit_models::validate::{self, BookingDraft};
use shareit_models::{BookingDto, BookingState, BookingStatus, Id, Page};
use tracing::{debug, info, warn};

use crate::db::{self, BookingScope, CreateBooking, DbPool};
use crate::error::{Error, Result};
use crate::models::now;

/// Service for bookings.
#[derive(Clone)]
pub struct BookingService {
    db: DbPool,
}

impl BookingService {
    /// Create a new booking service.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Request a booking of someone else's available item.
    pub async fn create(&self, booker_id: Id, draft: BookingDraft) -> Result<BookingDto> {
        db::get_user(&self.db, booker_id).await?;
        let item = db::get_item(&self.db, draft.item_id).await?;

        validate::booking_window(draft.start, draft.end, now())?;

        if item.owner_id == booker_id {
            warn!(item_id = item.id, booker_id, "Owner tried to book own item");
            return Err(Error::Forbidden(format!(
                "User {} owns item {} and cannot book it",
                booker_id, item.id
            )));
        }

        let booking = db::create_booking(
            &self.db,
            CreateBooking {
                start_at: draft.start,
                end_at: draft.end,
                item_id: item.id,
                booker_id,
            },
        )
        .await?
        .ok_or_else(|| Error::NotAvailable(format!("Item {} is not available", item.id)))?;

        info!(
            booking_id = booking.id,
            item_id = item.id,
            booker_id,
            start = %booking.start_at,
            end = %booking.end_at,
            "Created booking"
        );

        Ok(db::get_booking_details(&self.db, booking.id).await?.into())
    }

    /// A booking, visible only to its booker and the item's owner.
    pub async fn get(&self, id: Id, user_id: Id) -> Result<BookingDto> {
        let details = db::get_booking_details(&self.db, id).await?;
        if details.booking.booker_id != user_id && details.item.owner_id != user_id {
            return Err(Error::NotFound(format!("Booking {} not found", id)));
        }
        Ok(details.into())
    }

    /// Approve or reject a WAITING booking as the item's owner.
    pub async fn decide(&self, id: Id, user_id: Id, approved: bool) -> Result<BookingDto> {
        let details = db::get_booking_details(&self.db, id).await?;

        if details.booking.booker_id == user_id {
            return Err(Error::NotFound(format!("Booking {} not found", id)));
        }
        if details.item.owner_id != user_id {
            return Err(Error::Forbidden(format!(
                "User {} does not own item {}",
                user_id, details.item.id
            )));
        }
        if details.booking.status.is_decided() {
            return Err(Error::InvalidInput(format!(
                "Booking {} is already {}",
                id, details.booking.status
            )));
        }

        let status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };
        if !db::decide_booking(&self.db, id, status).await? {
            return Err(Error::InvalidInput(format!(
                "Booking {} has already been decided",
                id
            )));
        }

        info!(booking_id = id, owner_id = user_id, %status, "Decided booking");

        Ok(db::get_booking_details(&self.db, id).await?.into())
    }

    /// One page of bookings made by `booker_id`.
    pub async fn list_for_booker(
        &self,
        booker_id: Id,
        state: BookingState,
        page: Page,
    ) -> Result<Vec<BookingDto>> {
        self.list(BookingScope::Booker(booker_id), booker_id, state, page)
            .await
    }

    /// One page of bookings of the items `owner_id` owns.
    pub async fn list_for_owner(
        &self,
        owner_id: Id,
        state: BookingState,
        page: Page,
    ) -> Result<Vec<BookingDto>> {
        self.list(BookingScope::Owner(owner_id), owner_id, state, page)
            .await
    }

    async fn list(
        &self,
        scope: BookingScope,
        user_id: Id,
        state: BookingState,
        page: Page,
    ) -> Result<Vec<BookingDto>> {
        db::get_user(&self.db, user_id).await?;
        let bookings = db::list_bookings(&self.db, scope, state, now(), page).await?;
        debug!(?scope, %state, count = bookings.len(), "Listed bookings");
        Ok(bookings.into_iter().map(BookingDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_item, create_user, test_pool, CreateItem, CreateUser};
    use chrono::{Duration, NaiveDateTime};
    use shareit_models::ValidationError;

    struct Fixture {
        pool: DbPool,
        service: BookingService,
        owner: Id,
        booker: Id,
        stranger: Id,
        item: Id,
    }

    async fn fixture() -> Fixture {
        let pool = test_pool().await;
        let mut ids = Vec::new();
        for (name, email) in [
            ("Owner", "owner@example.com"),
            ("Booker", "booker@example.com"),
            ("Stranger", "stranger@example.com"),
        ] {
            let user = create_user(
                &pool,
                CreateUser {
                    name: name.to_string(),
                    email: email.to_string(),
                },
            )
            .await
            .unwrap();
            ids.push(user.id);
        }
        let item = create_item(
            &pool,
            CreateItem {
                name: "Drill".to_string(),
                description: "Cordless".to_string(),
                available: true,
                owner_id: ids[0],
                request_id: None,
            },
        )
        .await
        .unwrap();
        Fixture {
            service: BookingService::new(pool.clone()),
            pool,
            owner: ids[0],
            booker: ids[1],
            stranger: ids[2],
            item: item.id,
        }
    }

    fn window(item_id: Id, start_in: Duration, end_in: Duration) -> BookingDraft {
        let at: NaiveDateTime = now();
        BookingDraft {
            item_id,
            start: at + start_in,
            end: at + end_in,
        }
    }

    fn tomorrow(item_id: Id) -> BookingDraft {
        window(item_id, Duration::days(1), Duration::days(2))
    }

    #[tokio::test]
    async fn test_booking_lifecycle() {
        let f = fixture().await;
        let booking = f
            .service
            .create(f.booker, tomorrow(f.item))
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Waiting);
        assert_eq!(booking.booker.id, f.booker);
        assert_eq!(booking.item.id, f.item);

        let approved = f.service.decide(booking.id, f.owner, true).await.unwrap();
        assert_eq!(approved.status, BookingStatus::Approved);

        let again = f.service.decide(booking.id, f.owner, false).await.unwrap_err();
        assert!(matches!(again, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_decision_gated_by_owner() {
        let f = fixture().await;
        let booking = f
            .service
            .create(f.booker, tomorrow(f.item))
            .await
            .unwrap();

        let by_booker = f.service.decide(booking.id, f.booker, true).await.unwrap_err();
        assert!(matches!(by_booker, Error::NotFound(_)));

        let by_stranger = f
            .service
            .decide(booking.id, f.stranger, true)
            .await
            .unwrap_err();
        assert!(matches!(by_stranger, Error::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_owner_cannot_book_own_item() {
        let f = fixture().await;
        let err = f
            .service
            .create(f.owner, tomorrow(f.item))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_unavailable_item_cannot_be_booked() {
        let f = fixture().await;
        sqlx::query("UPDATE items SET available = 0 WHERE id = ?")
            .bind(f.item)
            .execute(&f.pool)
            .await
            .unwrap();

        let err = f
            .service
            .create(f.booker, tomorrow(f.item))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotAvailable(_)));
    }

    #[tokio::test]
    async fn test_window_checked_after_lookup() {
        let f = fixture().await;

        let missing_item = f
            .service
            .create(f.booker, window(999, Duration::hours(-2), Duration::hours(-1)))
            .await
            .unwrap_err();
        assert!(matches!(missing_item, Error::NotFound(_)));

        let past = f
            .service
            .create(
                f.booker,
                window(f.item, Duration::hours(-2), Duration::hours(-1)),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            past,
            Error::Validation(ValidationError::InvalidRange(_))
        ));

        let empty = f
            .service
            .create(f.booker, window(f.item, Duration::days(1), Duration::days(1)))
            .await
            .unwrap_err();
        assert!(matches!(
            empty,
            Error::Validation(ValidationError::InvalidRange(_))
        ));
    }

    #[tokio::test]
    async fn test_get_hidden_from_strangers() {
        let f = fixture().await;
        let booking = f
            .service
            .create(f.booker, tomorrow(f.item))
            .await
            .unwrap();

        assert_eq!(f.service.get(booking.id, f.owner).await.unwrap(), booking);
        assert_eq!(f.service.get(booking.id, f.booker).await.unwrap(), booking);
        assert!(matches!(
            f.service.get(booking.id, f.stranger).await.unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_listings_by_role() {
        let f = fixture().await;
        let first = f
            .service
            .create(f.booker, tomorrow(f.item))
            .await
            .unwrap();
        let second = f
            .service
            .create(
                f.booker,
                window(f.item, Duration::days(3), Duration::days(4)),
            )
            .await
            .unwrap();
        f.service.decide(first.id, f.owner, false).await.unwrap();

        let page = Page::new(0, 10).unwrap();
        let all = f
            .service
            .list_for_booker(f.booker, BookingState::All, page)
            .await
            .unwrap();
        assert_eq!(
            all.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![second.id, first.id]
        );

        let rejected = f
            .service
            .list_for_owner(f.owner, BookingState::Rejected, page)
            .await
            .unwrap();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].id, first.id);

        let unknown = f
            .service
            .list_for_owner(4242, BookingState::All, page)
            .await
            .unwrap_err();
        assert!(matches!(unknown, Error::NotFound(_)));
    }
}

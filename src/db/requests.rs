//! Item request database queries.

use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use shareit_models::{Id, Page};
use sqlx::FromRow;

use super::DbPool;

/// Item request record from the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ItemRequest {
    pub id: Id,
    pub description: String,
    pub requestor_id: Id,
    pub created_at: NaiveDateTime,
}

/// Input for creating an item request.
#[derive(Debug, Clone)]
pub struct CreateItemRequest {
    pub description: String,
    pub requestor_id: Id,
    pub created_at: NaiveDateTime,
}

/// Create a new item request.
pub async fn create_request(pool: &DbPool, input: CreateItemRequest) -> Result<ItemRequest> {
    sqlx::query_as::<_, ItemRequest>(
        r#"
        INSERT INTO item_requests (description, requestor_id, created_at)
        VALUES (?, ?, ?)
        RETURNING id, description, requestor_id, created_at
        "#,
    )
    .bind(&input.description)
    .bind(input.requestor_id)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
    .map_err(Error::from)
}

/// Get an item request by ID.
pub async fn get_request(pool: &DbPool, id: Id) -> Result<ItemRequest> {
    sqlx::query_as::<_, ItemRequest>(
        "SELECT id, description, requestor_id, created_at FROM item_requests WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| Error::NotFound(format!("Item request {} not found", id)))
}

/// Requests made by one user, newest first.
pub async fn list_requests_by_requestor(pool: &DbPool, requestor_id: Id) -> Result<Vec<ItemRequest>> {
    sqlx::query_as::<_, ItemRequest>(
        r#"
        SELECT id, description, requestor_id, created_at FROM item_requests
        WHERE requestor_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(requestor_id)
    .fetch_all(pool)
    .await
    .map_err(Error::from)
}

/// One page of requests made by anyone except `user_id`, newest first.
pub async fn list_requests_of_others(
    pool: &DbPool,
    user_id: Id,
    page: Page,
) -> Result<Vec<ItemRequest>> {
    sqlx::query_as::<_, ItemRequest>(
        r#"
        SELECT id, description, requestor_id, created_at FROM item_requests
        WHERE requestor_id <> ?
        ORDER BY created_at DESC, id DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(user_id)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await
    .map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_user, test_pool, CreateUser};
    use chrono::{Duration, NaiveDate};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    async fn user(pool: &DbPool, email: &str) -> Id {
        create_user(
            pool,
            CreateUser {
                name: "User".to_string(),
                email: email.to_string(),
            },
        )
        .await
        .unwrap()
        .id
    }

    async fn request(pool: &DbPool, requestor_id: Id, created_at: NaiveDateTime) -> ItemRequest {
        create_request(
            pool,
            CreateItemRequest {
                description: "Need a ladder".to_string(),
                requestor_id,
                created_at,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_request() {
        let pool = test_pool().await;
        let anna = user(&pool, "anna@example.com").await;
        let created = request(&pool, anna, at(9)).await;

        let fetched = get_request(&pool, created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.created_at, at(9));
    }

    #[tokio::test]
    async fn test_own_requests_newest_first() {
        let pool = test_pool().await;
        let anna = user(&pool, "anna@example.com").await;
        let older = request(&pool, anna, at(9)).await;
        let newer = request(&pool, anna, at(9) + Duration::minutes(1)).await;

        let listed = list_requests_by_requestor(&pool, anna).await.unwrap();
        assert_eq!(listed, vec![newer, older]);
    }

    #[tokio::test]
    async fn test_requests_of_others_excludes_caller() {
        let pool = test_pool().await;
        let anna = user(&pool, "anna@example.com").await;
        let bob = user(&pool, "bob@example.com").await;
        request(&pool, anna, at(9)).await;
        let bobs = request(&pool, bob, at(10)).await;

        let page = Page::new(0, 10).unwrap();
        assert_eq!(
            list_requests_of_others(&pool, anna, page).await.unwrap(),
            vec![bobs]
        );
    }

    #[tokio::test]
    async fn test_missing_request_is_not_found() {
        let pool = test_pool().await;
        assert!(matches!(
            get_request(&pool, 7).await.unwrap_err(),
            Error::NotFound(_)
        ));
    }
}

//! Item-request board service.
//!
//! Users post requests for items nobody lists yet; owners answer by creating
//! items against the request id.

use shareit_models::{Id, ItemRequestDto, Page};
use tracing::{debug, info};

use crate::db::{self, CreateItemRequest, DbPool, ItemRequest};
use crate::error::Result;
use crate::models::{item_request_dto, now};

/// Service for item requests.
#[derive(Clone)]
pub struct ItemRequestService {
    db: DbPool,
}

impl ItemRequestService {
    /// Create a new item request service.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Post a request stamped with the current time.
    pub async fn create(&self, requestor_id: Id, description: String) -> Result<ItemRequestDto> {
        db::get_user(&self.db, requestor_id).await?;

        let request = db::create_request(
            &self.db,
            CreateItemRequest {
                description,
                requestor_id,
                created_at: now(),
            },
        )
        .await?;

        info!(request_id = request.id, requestor_id, "Created item request");

        Ok(item_request_dto(request, Vec::new()))
    }

    /// The caller's own requests, newest first.
    pub async fn list_own(&self, requestor_id: Id) -> Result<Vec<ItemRequestDto>> {
        db::get_user(&self.db, requestor_id).await?;
        let requests = db::list_requests_by_requestor(&self.db, requestor_id).await?;
        self.with_items(requests).await
    }

    /// Everyone else's requests, newest first.
    pub async fn list_others(&self, user_id: Id, page: Page) -> Result<Vec<ItemRequestDto>> {
        db::get_user(&self.db, user_id).await?;
        let requests = db::list_requests_of_others(&self.db, user_id, page).await?;
        debug!(user_id, count = requests.len(), "Listed requests of other users");
        self.with_items(requests).await
    }

    /// A single request. The caller must be a known user.
    pub async fn get(&self, user_id: Id, request_id: Id) -> Result<ItemRequestDto> {
        db::get_user(&self.db, user_id).await?;
        let request = db::get_request(&self.db, request_id).await?;
        let items = db::list_items_by_request(&self.db, request.id).await?;
        Ok(item_request_dto(request, items))
    }

    async fn with_items(&self, requests: Vec<ItemRequest>) -> Result<Vec<ItemRequestDto>> {
        let mut dtos = Vec::with_capacity(requests.len());
        for request in requests {
            let items = db::list_items_by_request(&self.db, request.id).await?;
            dtos.push(item_request_dto(request, items));
        }
        Ok(dtos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_item, create_user, test_pool, CreateItem, CreateUser};
    use crate::Error;

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

    #[tokio::test]
    async fn test_request_lists_fulfilling_items() {
        let pool = test_pool().await;
        let anna = user(&pool, "anna@example.com").await;
        let bob = user(&pool, "bob@example.com").await;
        let service = ItemRequestService::new(pool.clone());

        let request = service
            .create(anna, "Need a ladder".to_string())
            .await
            .unwrap();
        assert!(request.items.is_empty());

        create_item(
            &pool,
            CreateItem {
                name: "Ladder".to_string(),
                description: "Three metres".to_string(),
                available: true,
                owner_id: bob,
                request_id: Some(request.id),
            },
        )
        .await
        .unwrap();

        let fetched = service.get(bob, request.id).await.unwrap();
        assert_eq!(fetched.items.len(), 1);
        assert_eq!(fetched.items[0].request_id, Some(request.id));

        let own = service.list_own(anna).await.unwrap();
        assert_eq!(own, vec![fetched]);
    }

    #[tokio::test]
    async fn test_others_excludes_own_requests() {
        let pool = test_pool().await;
        let anna = user(&pool, "anna@example.com").await;
        let bob = user(&pool, "bob@example.com").await;
        let service = ItemRequestService::new(pool);

        service.create(anna, "Tent".to_string()).await.unwrap();
        let bobs = service.create(bob, "Kayak".to_string()).await.unwrap();

        let page = Page::new(0, 10).unwrap();
        let others = service.list_others(anna, page).await.unwrap();
        assert_eq!(others, vec![bobs]);
    }

    #[tokio::test]
    async fn test_unknown_caller_is_not_found() {
        let pool = test_pool().await;
        let anna = user(&pool, "anna@example.com").await;
        let service = ItemRequestService::new(pool);
        let request = service.create(anna, "Tent".to_string()).await.unwrap();

        let err = service.get(404, request.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        let err = service.create(404, "Tent".to_string()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}

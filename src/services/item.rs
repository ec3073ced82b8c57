//! Item catalog service.
//!
//! Owns items, their comments, and the owner's view of the booking window
//! (last and next booking) shown on the item page.

use shareit_models::validate::ItemDraft;
use shareit_models::{CommentDto, Id, ItemDto, ItemPatch, LongItemDto, Page, Patch};
use tracing::{debug, info, warn};

use crate::db::{self, CreateComment, CreateItem, DbPool, Item};
use crate::error::{Error, Result};
use crate::models::{long_item_dto, now};

/// Service for items and comments.
#[derive(Clone)]
pub struct ItemService {
    db: DbPool,
}

impl ItemService {
    /// Create a new item service.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// List a new item, optionally answering an item request.
    pub async fn create(&self, owner_id: Id, draft: ItemDraft) -> Result<ItemDto> {
        db::get_user(&self.db, owner_id).await?;
        if let Some(request_id) = draft.request_id {
            db::get_request(&self.db, request_id).await?;
        }

        let item = db::create_item(
            &self.db,
            CreateItem {
                name: draft.name,
                description: draft.description,
                available: draft.available,
                owner_id,
                request_id: draft.request_id,
            },
        )
        .await?;

        info!(item_id = item.id, owner_id, request_id = ?item.request_id, "Created item");

        Ok(item.into())
    }

    /// Get an item record by ID.
    pub async fn get(&self, id: Id) -> Result<Item> {
        db::get_item(&self.db, id).await
    }

    /// Item page for `user_id`. Bookings are only shown to the owner.
    pub async fn get_long(&self, id: Id, user_id: Id) -> Result<LongItemDto> {
        let item = self.get(id).await?;
        if item.owner_id == user_id {
            self.long_view(item).await
        } else {
            let comments = db::list_comments_by_item(&self.db, item.id).await?;
            Ok(long_item_dto(item, None, None, comments))
        }
    }

    /// One page of an owner's items with bookings and comments.
    pub async fn list_long_by_owner(&self, owner_id: Id, page: Page) -> Result<Vec<LongItemDto>> {
        db::get_user(&self.db, owner_id).await?;
        let items = db::list_items_by_owner_paginated(&self.db, owner_id, page).await?;

        let mut views = Vec::with_capacity(items.len());
        for item in items {
            views.push(self.long_view(item).await?);
        }
        Ok(views)
    }

    /// Available items mentioning `text` in name or description.
    pub async fn search(&self, text: &str, page: Page) -> Result<Vec<ItemDto>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items = db::search_available_items(&self.db, text, page).await?;
        debug!(text, count = items.len(), "Searched items");

        Ok(items.into_iter().map(ItemDto::from).collect())
    }

    /// Apply a partial update. Only the owner may change an item.
    pub async fn update(&self, owner_id: Id, id: Id, patch: ItemPatch) -> Result<ItemDto> {
        let current = self.get(id).await?;
        if current.owner_id != owner_id {
            warn!(item_id = id, user_id = owner_id, "Item update by non-owner");
            return Err(Error::Forbidden(format!(
                "User {} does not own item {}",
                owner_id, id
            )));
        }
        if let Patch::Value(request_id) = &patch.request_id {
            db::get_request(&self.db, *request_id).await?;
        }

        let updated = Item {
            id,
            name: patch.name.or_keep(current.name),
            description: patch.description.or_keep(current.description),
            available: patch.available.or_keep(current.available),
            owner_id: current.owner_id,
            request_id: patch.request_id.apply_nullable(current.request_id),
        };
        let item = db::update_item(&self.db, &updated).await?;

        debug!(item_id = id, available = item.available, "Updated item");

        Ok(item.into())
    }

    /// Comment on an item the author has rented.
    ///
    /// The author needs an APPROVED booking of the item that has already started.
    pub async fn add_comment(&self, author_id: Id, item_id: Id, text: String) -> Result<CommentDto> {
        db::get_user(&self.db, author_id).await?;
        let item = self.get(item_id).await?;

        let created_at = now();
        if !db::has_started_approved_booking(&self.db, item.id, author_id, created_at).await? {
            return Err(Error::NotAvailable(format!(
                "User {} has not rented item {}",
                author_id, item.id
            )));
        }

        let comment = db::create_comment(
            &self.db,
            CreateComment {
                text,
                item_id: item.id,
                author_id,
                created_at,
            },
        )
        .await?;

        info!(comment_id = comment.id, item_id, author_id, "Created comment");

        Ok(comment.into())
    }

    async fn long_view(&self, item: Item) -> Result<LongItemDto> {
        let at = now();
        let last = db::last_booking(&self.db, item.id, at).await?;
        let next = db::next_booking(&self.db, item.id, at).await?;
        let comments = db::list_comments_by_item(&self.db, item.id).await?;
        Ok(long_item_dto(item, last, next, comments))
    }
}

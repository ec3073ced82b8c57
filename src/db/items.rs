//! Item database queries.

use crate::{Error, Result};
use serde::Serialize;
use shareit_models::{Id, Page};
use sqlx::FromRow;

use super::DbPool;

const ITEM_COLUMNS: &str = "id, name, description, available, owner_id, request_id";

/// Item record from the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Item {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: Id,
    pub request_id: Option<Id>,
}

/// Input for creating an item.
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: Id,
    pub request_id: Option<Id>,
}

/// Search key for case-insensitive matching of any script.
pub fn fold_text(s: &str) -> String {
    s.to_lowercase()
}

/// Create a new item.
pub async fn create_item(pool: &DbPool, input: CreateItem) -> Result<Item> {
    let sql = format!(
        r#"
        INSERT INTO items (name, description, available, owner_id, request_id, name_folded, description_folded)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING {ITEM_COLUMNS}
        "#
    );
    sqlx::query_as::<_, Item>(&sql)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.available)
        .bind(input.owner_id)
        .bind(input.request_id)
        .bind(fold_text(&input.name))
        .bind(fold_text(&input.description))
        .fetch_one(pool)
        .await
        .map_err(Error::from)
}

/// Get an item by ID.
pub async fn get_item(pool: &DbPool, id: Id) -> Result<Item> {
    let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?");
    sqlx::query_as::<_, Item>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Item {} not found", id)))
}

/// All items of an owner, ordered by id.
pub async fn list_items_by_owner(pool: &DbPool, owner_id: Id) -> Result<Vec<Item>> {
    let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE owner_id = ? ORDER BY id");
    sqlx::query_as::<_, Item>(&sql)
        .bind(owner_id)
        .fetch_all(pool)
        .await
        .map_err(Error::from)
}

/// One page of an owner's items, ordered by id.
pub async fn list_items_by_owner_paginated(
    pool: &DbPool,
    owner_id: Id,
    page: Page,
) -> Result<Vec<Item>> {
    let sql = format!(
        "SELECT {ITEM_COLUMNS} FROM items WHERE owner_id = ? ORDER BY id LIMIT ? OFFSET ?"
    );
    sqlx::query_as::<_, Item>(&sql)
        .bind(owner_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await
        .map_err(Error::from)
}

/// Available items whose name or description contains `text`, ignoring case.
pub async fn search_available_items(pool: &DbPool, text: &str, page: Page) -> Result<Vec<Item>> {
    let needle = fold_text(text);
    let sql = format!(
        r#"
        SELECT {ITEM_COLUMNS} FROM items
        WHERE available = 1
          AND (instr(name_folded, ?) > 0 OR instr(description_folded, ?) > 0)
        ORDER BY id
        LIMIT ? OFFSET ?
        "#
    );
    sqlx::query_as::<_, Item>(&sql)
        .bind(&needle)
        .bind(&needle)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await
        .map_err(Error::from)
}

/// Items created against an item request, ordered by id.
pub async fn list_items_by_request(pool: &DbPool, request_id: Id) -> Result<Vec<Item>> {
    let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE request_id = ? ORDER BY id");
    sqlx::query_as::<_, Item>(&sql)
        .bind(request_id)
        .fetch_all(pool)
        .await
        .map_err(Error::from)
}

/// Overwrite every mutable column of an item.
pub async fn update_item(pool: &DbPool, item: &Item) -> Result<Item> {
    let sql = format!(
        r#"
        UPDATE items
        SET name = ?, description = ?, available = ?, request_id = ?,
            name_folded = ?, description_folded = ?
        WHERE id = ?
        RETURNING {ITEM_COLUMNS}
        "#
    );
    sqlx::query_as::<_, Item>(&sql)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.available)
        .bind(item.request_id)
        .bind(fold_text(&item.name))
        .bind(fold_text(&item.description))
        .bind(item.id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Item {} not found", item.id)))
}

//! Comment database queries.

use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use shareit_models::Id;
use sqlx::FromRow;

use super::DbPool;

/// Comment record joined with its author's name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Comment {
    pub id: Id,
    pub text: String,
    pub item_id: Id,
    pub author_id: Id,
    pub author_name: String,
    pub created_at: NaiveDateTime,
}

/// Input for creating a comment.
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub text: String,
    pub item_id: Id,
    pub author_id: Id,
    pub created_at: NaiveDateTime,
}

/// Create a comment and return it with the author's name.
pub async fn create_comment(pool: &DbPool, input: CreateComment) -> Result<Comment> {
    let (id,): (Id,) = sqlx::query_as(
        r#"
        INSERT INTO comments (text, item_id, author_id, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&input.text)
    .bind(input.item_id)
    .bind(input.author_id)
    .bind(input.created_at)
    .fetch_one(pool)
    .await?;

    get_comment(pool, id).await
}

/// Get a comment by ID.
pub async fn get_comment(pool: &DbPool, id: Id) -> Result<Comment> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT c.id, c.text, c.item_id, c.author_id, u.name AS author_name, c.created_at
        FROM comments c
        JOIN users u ON u.id = c.author_id
        WHERE c.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| Error::NotFound(format!("Comment {} not found", id)))
}

/// Comments on an item, oldest first.
pub async fn list_comments_by_item(pool: &DbPool, item_id: Id) -> Result<Vec<Comment>> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT c.id, c.text, c.item_id, c.author_id, u.name AS author_name, c.created_at
        FROM comments c
        JOIN users u ON u.id = c.author_id
        WHERE c.item_id = ?
        ORDER BY c.created_at, c.id
        "#,
    )
    .bind(item_id)
    .fetch_all(pool)
    .await
    .map_err(Error::from)
}

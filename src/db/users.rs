//! User database queries.

use crate::{Error, Result};
use serde::Serialize;
use shareit_models::Id;
use sqlx::FromRow;

use super::DbPool;

// ============================================================================
// User Types
// ============================================================================

/// User record from the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub email: String,
}

/// Input for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

// ============================================================================
// User Queries
// ============================================================================

/// Create a new user.
pub async fn create_user(pool: &DbPool, input: CreateUser) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email)
        VALUES (?, ?)
        RETURNING id, name, email
        "#,
    )
    .bind(&input.name)
    .bind(&input.email)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            Error::AlreadyExists(format!("Email {} is already registered", input.email))
        }
        _ => Error::from(e),
    })
}

/// Get a user by ID.
pub async fn get_user(pool: &DbPool, id: Id) -> Result<User> {
    sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("User {} not found", id)))
}

/// Get a user by email.
pub async fn get_user_by_email(pool: &DbPool, email: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(Error::from)
}

/// List all users ordered by id.
pub async fn list_users(pool: &DbPool) -> Result<Vec<User>> {
    sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
        .fetch_all(pool)
        .await
        .map_err(Error::from)
}

/// Overwrite a user's name and email.
pub async fn update_user(pool: &DbPool, user: &User) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET name = ?, email = ?
        WHERE id = ?
        RETURNING id, name, email
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(user.id)
    .fetch_optional(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            Error::AlreadyExists(format!("Email {} is already registered", user.email))
        }
        _ => Error::from(e),
    })?
    .ok_or_else(|| Error::NotFound(format!("User {} not found", user.id)))
}

/// Delete a user.
pub async fn delete_user(pool: &DbPool, id: Id) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                Error::Conflict(format!(
                    "User {} still owns items, bookings, requests or comments",
                    id
                ))
            }
            _ => Error::from(e),
        })?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("User {} not found", id)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn input(name: &str, email: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let pool = test_pool().await;

        let user = create_user(&pool, input("Anna", "anna@example.com"))
            .await
            .unwrap();
        assert!(user.id > 0);

        let fetched = get_user(&pool, user.id).await.unwrap();
        assert_eq!(fetched, user);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_already_exists() {
        let pool = test_pool().await;
        create_user(&pool, input("Anna", "anna@example.com"))
            .await
            .unwrap();

        let err = create_user(&pool, input("Other", "anna@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let pool = test_pool().await;
        let err = get_user(&pool, 42).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_users_ordered_by_id() {
        let pool = test_pool().await;
        let a = create_user(&pool, input("A", "a@example.com")).await.unwrap();
        let b = create_user(&pool, input("B", "b@example.com")).await.unwrap();

        let users = list_users(&pool).await.unwrap();
        assert_eq!(users, vec![a, b]);
    }

    #[tokio::test]
    async fn test_delete_user() {
        let pool = test_pool().await;
        let user = create_user(&pool, input("Anna", "anna@example.com"))
            .await
            .unwrap();

        delete_user(&pool, user.id).await.unwrap();
        assert!(matches!(
            delete_user(&pool, user.id).await.unwrap_err(),
            Error::NotFound(_)
        ));
        assert!(get_user_by_email(&pool, "anna@example.com")
            .await
            .unwrap()
            .is_none());
    }
}

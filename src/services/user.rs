//! User directory service.

use shareit_models::validate::UserDraft;
use shareit_models::{Id, Patch, UserPatch};
use tracing::{debug, info};

use crate::db::{self, CreateUser, DbPool, User};
use crate::error::{Error, Result};

/// Service for managing users.
#[derive(Clone)]
pub struct UserService {
    db: DbPool,
}

impl UserService {
    /// Create a new user service.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Register a user. The email must not be taken.
    pub async fn create(&self, draft: UserDraft) -> Result<User> {
        let user = db::create_user(
            &self.db,
            CreateUser {
                name: draft.name,
                email: draft.email,
            },
        )
        .await?;

        info!(user_id = user.id, email = %user.email, "Created user");

        Ok(user)
    }

    /// Get a user by ID.
    pub async fn get(&self, id: Id) -> Result<User> {
        db::get_user(&self.db, id).await
    }

    /// All users ordered by id.
    pub async fn list(&self) -> Result<Vec<User>> {
        db::list_users(&self.db).await
    }

    /// Apply a partial update. A new email must not belong to another user.
    pub async fn update(&self, id: Id, patch: UserPatch) -> Result<User> {
        let current = db::get_user(&self.db, id).await?;

        if let Patch::Value(email) = &patch.email {
            if let Some(holder) = db::get_user_by_email(&self.db, email).await? {
                if holder.id != id {
                    return Err(Error::AlreadyExists(format!(
                        "Email {} is already registered",
                        email
                    )));
                }
            }
        }

        let updated = User {
            id,
            name: patch.name.or_keep(current.name),
            email: patch.email.or_keep(current.email),
        };
        let user = db::update_user(&self.db, &updated).await?;

        debug!(user_id = id, "Updated user");

        Ok(user)
    }

    /// Delete a user that nothing references any more.
    pub async fn delete(&self, id: Id) -> Result<()> {
        let owned = db::list_items_by_owner(&self.db, id).await?;
        if !owned.is_empty() {
            return Err(Error::Conflict(format!(
                "User {} still owns {} item(s)",
                id,
                owned.len()
            )));
        }
        db::delete_user(&self.db, id).await?;
        info!(user_id = id, "Deleted user");
        Ok(())
    }
}

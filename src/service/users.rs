//! User service
//!
//! Business rules layered over user storage, plus friendship graph
//! maintenance. Friendship is two directed edges kept in step: every
//! add/remove mutates both users' friend-sets inside one write-lock
//! critical section.

use crate::error::AppError;
use crate::model::User;
use crate::storage::InMemoryUserStorage;
use tokio::sync::RwLock;
use tracing::debug;

/// User business logic over locked in-memory storage
#[derive(Debug, Default)]
pub struct UserService {
    storage: RwLock<InMemoryUserStorage>,
}

impl UserService {
    pub fn new() -> Self {
        Self {
            storage: RwLock::new(InMemoryUserStorage::new()),
        }
    }

    /// All users, sorted by ascending id
    pub async fn list(&self) -> Vec<User> {
        self.storage.read().await.find_all()
    }

    /// A single user, or `NotFound`
    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.storage
            .read()
            .await
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("user with id {id}")))
    }

    /// Validate (normalizing the display name) and store a new user
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        user.validate()?;
        let stored = self.storage.write().await.create(user);
        debug!(user_id = stored.id, login = %stored.login, "user created");
        Ok(stored)
    }

    /// Validate (normalizing the display name) and fully replace a user
    pub async fn update(&self, mut user: User) -> Result<User, AppError> {
        user.validate()?;
        let id = user.id;
        let updated = self
            .storage
            .write()
            .await
            .update(user)
            .ok_or_else(|| AppError::NotFound(format!("user with id {id}")))?;
        debug!(user_id = updated.id, login = %updated.login, "user updated");
        Ok(updated)
    }

    /// Remove a user, or `NotFound` when the id does not exist
    ///
    /// Friend edges pointing at the removed user are left in place; they
    /// drop out lazily when friend-sets are resolved.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.storage
            .write()
            .await
            .delete(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("user with id {id}")))
    }

    /// Link two users as friends: each gains a directed edge to the other
    ///
    /// Both lookups happen before either write, so a missing id on either
    /// side fails the whole operation without a partial edge.
    pub async fn add_friend(&self, user_id: i64, friend_id: i64) -> Result<(), AppError> {
        let mut storage = self.storage.write().await;
        let mut user = storage
            .find_by_id(user_id)
            .ok_or_else(|| AppError::NotFound(format!("user with id {user_id}")))?;
        let mut friend = storage
            .find_by_id(friend_id)
            .ok_or_else(|| AppError::NotFound(format!("user with id {friend_id}")))?;

        user.add_friend(friend_id);
        friend.add_friend(user_id);
        // Write the friend first: when user_id == friend_id both records are
        // the same user, and the second write must win with both edges set.
        storage.update(friend);
        if user_id != friend_id {
            storage.update(user);
        }
        debug!(user_id, friend_id, "friendship added");
        Ok(())
    }

    /// Unlink two users; idempotent when they are not currently friends
    pub async fn remove_friend(&self, user_id: i64, friend_id: i64) -> Result<(), AppError> {
        let mut storage = self.storage.write().await;
        let mut user = storage
            .find_by_id(user_id)
            .ok_or_else(|| AppError::NotFound(format!("user with id {user_id}")))?;
        let mut friend = storage
            .find_by_id(friend_id)
            .ok_or_else(|| AppError::NotFound(format!("user with id {friend_id}")))?;

        user.remove_friend(friend_id);
        friend.remove_friend(user_id);
        storage.update(friend);
        if user_id != friend_id {
            storage.update(user);
        }
        debug!(user_id, friend_id, "friendship removed");
        Ok(())
    }

    /// A user's friends as full records, sorted by ascending id
    pub async fn friends(&self, user_id: i64) -> Result<Vec<User>, AppError> {
        let storage = self.storage.read().await;
        let user = storage
            .find_by_id(user_id)
            .ok_or_else(|| AppError::NotFound(format!("user with id {user_id}")))?;
        Ok(storage.resolve_many(&user.friends))
    }

    /// Friends both users have in common, as full records
    ///
    /// Symmetric in its arguments; an empty intersection is an empty list.
    pub async fn common_friends(&self, user_id: i64, other_id: i64) -> Result<Vec<User>, AppError> {
        let storage = self.storage.read().await;
        let user = storage
            .find_by_id(user_id)
            .ok_or_else(|| AppError::NotFound(format!("user with id {user_id}")))?;
        let other = storage
            .find_by_id(other_id)
            .ok_or_else(|| AppError::NotFound(format!("user with id {other_id}")))?;

        let common = user
            .friends
            .intersection(&other.friends)
            .copied()
            .collect();
        Ok(storage.resolve_many(&common))
    }
}

//! User record and validation

use crate::error::AppError;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// User structure
///
/// The friend-set holds directed edges: `friends` contains the ids this user
/// points at. Friendship is maintained as a pair of directed edges (A→B and
/// B→A) by the service layer, never as a single undirected edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier, assigned by storage (0 on incoming create payloads)
    #[serde(default)]
    pub id: i64,
    /// Email address, must contain '@' (absent in a payload is treated as empty)
    #[serde(default)]
    pub email: String,
    /// Login handle, non-empty and free of whitespace
    #[serde(default)]
    pub login: String,
    /// Display name; falls back to the login when empty
    #[serde(default)]
    pub name: String,
    /// Date of birth, must not be in the future
    pub birthday: NaiveDate,
    /// Ids of this user's friends (outgoing directed edges)
    #[serde(default)]
    pub friends: HashSet<i64>,
}

impl User {
    /// Validate the user's fields, normalizing the display name first
    ///
    /// An empty name is not an error: it is replaced with the login before
    /// the rejection rules run, so callers must keep the mutated record.
    pub fn validate(&mut self) -> Result<(), AppError> {
        if self.name.is_empty() {
            self.name = self.login.clone();
        }
        if !self.email.contains('@') {
            return Err(AppError::InvalidInput(format!(
                "email '{}' must contain '@'",
                self.email
            )));
        }
        if self.login.is_empty() || self.login.chars().any(char::is_whitespace) {
            return Err(AppError::InvalidInput(format!(
                "login '{}' must be non-empty and contain no whitespace",
                self.login
            )));
        }
        if self.birthday > Utc::now().date_naive() {
            return Err(AppError::InvalidInput(format!(
                "birthday {} must not be in the future",
                self.birthday
            )));
        }
        Ok(())
    }

    /// Add an outgoing friend edge; adding an existing edge is a no-op
    pub fn add_friend(&mut self, friend_id: i64) {
        self.friends.insert(friend_id);
    }

    /// Remove an outgoing friend edge; removing a missing edge is a no-op
    pub fn remove_friend(&mut self, friend_id: i64) {
        self.friends.remove(&friend_id);
    }
}

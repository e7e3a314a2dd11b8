//! Film record and validation

use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum length of a film description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// The date of the first public film screening; no film can predate it
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).expect("valid calendar date")
}

/// Film structure
///
/// The identifier is assigned by storage on create and is immutable afterwards.
/// The like-set holds the ids of users who favorited this film; a `HashSet`
/// makes duplicate likes impossible by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Film {
    /// Unique identifier, assigned by storage (0 on incoming create payloads)
    #[serde(default)]
    pub id: i64,
    /// Display name of the film (absent in a payload is treated as empty)
    #[serde(default)]
    pub name: String,
    /// Short description, at most 200 characters
    #[serde(default)]
    pub description: String,
    /// Theatrical release date
    pub release_date: NaiveDate,
    /// Running time in minutes, strictly positive
    pub duration: i64,
    /// Ids of users who liked this film
    #[serde(default)]
    pub likes: HashSet<i64>,
}

impl Film {
    /// Validate the film's fields
    ///
    /// Returns `InvalidInput` naming the offending field on the first rule
    /// that fails.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::InvalidInput("film name must not be empty".to_string()));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::InvalidInput(format!(
                "film description must not exceed {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }
        if self.release_date < earliest_release_date() {
            return Err(AppError::InvalidInput(format!(
                "release date {} precedes the first film screening ({})",
                self.release_date,
                earliest_release_date()
            )));
        }
        if self.duration <= 0 {
            return Err(AppError::InvalidInput(format!(
                "film duration must be positive, got {}",
                self.duration
            )));
        }
        Ok(())
    }

    /// Record a like from the given user; adding an existing like is a no-op
    pub fn add_like(&mut self, user_id: i64) {
        self.likes.insert(user_id);
    }

    /// Remove a like from the given user; removing a non-member is a no-op
    pub fn remove_like(&mut self, user_id: i64) {
        self.likes.remove(&user_id);
    }
}

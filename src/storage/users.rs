//! In-memory user storage
//!
//! Same discipline as film storage: copies out, write-back in, no locking
//! here. Additionally resolves sets of friend ids to full records.

use crate::model::User;
use std::collections::{HashMap, HashSet};

/// Identity-keyed user collection with autoincrement id assignment
#[derive(Debug)]
pub struct InMemoryUserStorage {
    users: HashMap<i64, User>,
    next_id: i64,
}

impl Default for InMemoryUserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStorage {
    /// Create an empty storage; the first assigned identifier is 1
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            next_id: 1,
        }
    }

    /// Snapshot of all users, sorted by ascending id
    pub fn find_all(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by_key(|user| user.id);
        users
    }

    /// Look up a user by id; absence is not an error at this layer
    pub fn find_by_id(&self, id: i64) -> Option<User> {
        self.users.get(&id).cloned()
    }

    /// Insert a new user, assigning the next identifier
    pub fn create(&mut self, mut user: User) -> User {
        user.id = self.next_id;
        self.next_id += 1;
        self.users.insert(user.id, user.clone());
        user
    }

    /// Replace the stored user with the given one (full replacement, no merge)
    ///
    /// Returns `None` when the id is not present.
    pub fn update(&mut self, user: User) -> Option<User> {
        if !self.users.contains_key(&user.id) {
            return None;
        }
        self.users.insert(user.id, user.clone());
        Some(user)
    }

    /// Remove a user by id, returning it if it existed
    pub fn delete(&mut self, id: i64) -> Option<User> {
        self.users.remove(&id)
    }

    /// Resolve a set of ids to user records, sorted by ascending id
    ///
    /// Ids with no stored user are skipped silently; a dangling friend edge
    /// left by a deleted user simply drops out of the result.
    pub fn resolve_many(&self, ids: &HashSet<i64>) -> Vec<User> {
        let mut users: Vec<User> = ids
            .iter()
            .filter_map(|id| self.users.get(id).cloned())
            .collect();
        users.sort_by_key(|user| user.id);
        users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(login: &str) -> User {
        User {
            id: 0,
            email: format!("{login}@example.com"),
            login: login.to_string(),
            name: login.to_string(),
            birthday: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            friends: HashSet::new(),
        }
    }

    #[test]
    fn create_assigns_increasing_ids_starting_at_one() {
        let mut storage = InMemoryUserStorage::new();
        assert_eq!(storage.create(user("a")).id, 1);
        assert_eq!(storage.create(user("b")).id, 2);
    }

    #[test]
    fn ids_survive_deletes() {
        let mut storage = InMemoryUserStorage::new();
        let first = storage.create(user("a"));
        storage.delete(first.id);
        assert_eq!(storage.create(user("b")).id, 2);
    }

    #[test]
    fn update_of_unknown_id_returns_none() {
        let mut storage = InMemoryUserStorage::new();
        let mut ghost = user("ghost");
        ghost.id = 42;
        assert!(storage.update(ghost).is_none());
    }

    #[test]
    fn resolve_many_skips_missing_ids() {
        let mut storage = InMemoryUserStorage::new();
        let a = storage.create(user("a"));
        let b = storage.create(user("b"));

        let ids: HashSet<i64> = [a.id, b.id, 99].into_iter().collect();
        let resolved = storage.resolve_many(&ids);
        let resolved_ids: Vec<i64> = resolved.iter().map(|u| u.id).collect();
        assert_eq!(resolved_ids, vec![a.id, b.id]);
    }

    #[test]
    fn resolve_many_of_empty_set_is_empty() {
        let storage = InMemoryUserStorage::new();
        assert!(storage.resolve_many(&HashSet::new()).is_empty());
    }
}

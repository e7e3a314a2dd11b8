//! In-memory film storage
//!
//! Owns the film map and the identity counter. Lookups hand out copies;
//! callers mutate a copy and write it back through [`InMemoryFilmStorage::update`].
//! Locking is the service layer's responsibility.

use crate::model::Film;
use std::collections::HashMap;

/// Identity-keyed film collection with autoincrement id assignment
#[derive(Debug)]
pub struct InMemoryFilmStorage {
    films: HashMap<i64, Film>,
    next_id: i64,
}

impl Default for InMemoryFilmStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFilmStorage {
    /// Create an empty storage; the first assigned identifier is 1
    pub fn new() -> Self {
        Self {
            films: HashMap::new(),
            next_id: 1,
        }
    }

    /// Snapshot of all films, sorted by ascending id
    pub fn find_all(&self) -> Vec<Film> {
        let mut films: Vec<Film> = self.films.values().cloned().collect();
        films.sort_by_key(|film| film.id);
        films
    }

    /// Look up a film by id; absence is not an error at this layer
    pub fn find_by_id(&self, id: i64) -> Option<Film> {
        self.films.get(&id).cloned()
    }

    /// Insert a new film, assigning the next identifier
    ///
    /// Identifiers are strictly increasing over the storage's lifetime and
    /// are never reused, even after deletes.
    pub fn create(&mut self, mut film: Film) -> Film {
        film.id = self.next_id;
        self.next_id += 1;
        self.films.insert(film.id, film.clone());
        film
    }

    /// Replace the stored film with the given one (full replacement, no merge)
    ///
    /// Returns `None` when the id is not present.
    pub fn update(&mut self, film: Film) -> Option<Film> {
        if !self.films.contains_key(&film.id) {
            return None;
        }
        self.films.insert(film.id, film.clone());
        Some(film)
    }

    /// Remove a film by id, returning it if it existed
    pub fn delete(&mut self, id: i64) -> Option<Film> {
        self.films.remove(&id)
    }

    /// Films ranked by descending like-count, ties broken by ascending id,
    /// truncated to `count` entries; a non-positive count yields an empty list
    pub fn find_popular(&self, count: i64) -> Vec<Film> {
        if count <= 0 {
            return Vec::new();
        }
        let mut films: Vec<Film> = self.films.values().cloned().collect();
        films.sort_by(|a, b| {
            b.likes
                .len()
                .cmp(&a.likes.len())
                .then_with(|| a.id.cmp(&b.id))
        });
        films.truncate(count as usize);
        films
    }
}

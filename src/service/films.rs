//! Film service
//!
//! Business rules layered over film storage: validation before any write,
//! NotFound surfacing for missing ids, and like-set maintenance.

use crate::error::AppError;
use crate::model::Film;
use crate::storage::InMemoryFilmStorage;
use tokio::sync::RwLock;
use tracing::debug;

/// Film business logic over locked in-memory storage
#[derive(Debug, Default)]
pub struct FilmService {
    storage: RwLock<InMemoryFilmStorage>,
}

impl FilmService {
    pub fn new() -> Self {
        Self {
            storage: RwLock::new(InMemoryFilmStorage::new()),
        }
    }

    /// All films, sorted by ascending id
    pub async fn list(&self) -> Vec<Film> {
        self.storage.read().await.find_all()
    }

    /// A single film, or `NotFound`
    pub async fn get(&self, id: i64) -> Result<Film, AppError> {
        self.storage
            .read()
            .await
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("film with id {id}")))
    }

    /// Validate and store a new film; storage assigns the id
    pub async fn create(&self, film: Film) -> Result<Film, AppError> {
        film.validate()?;
        let stored = self.storage.write().await.create(film);
        debug!(film_id = stored.id, name = %stored.name, "film created");
        Ok(stored)
    }

    /// Validate and fully replace an existing film
    pub async fn update(&self, film: Film) -> Result<Film, AppError> {
        film.validate()?;
        let id = film.id;
        let updated = self
            .storage
            .write()
            .await
            .update(film)
            .ok_or_else(|| AppError::NotFound(format!("film with id {id}")))?;
        debug!(film_id = updated.id, name = %updated.name, "film updated");
        Ok(updated)
    }

    /// Remove a film, or `NotFound` when the id does not exist
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.storage
            .write()
            .await
            .delete(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("film with id {id}")))
    }

    /// Record a like; idempotent when the user already liked the film
    ///
    /// Fetch, mutate, and write-back happen under a single write-lock
    /// acquisition, never through a shared alias into storage.
    pub async fn add_like(&self, film_id: i64, user_id: i64) -> Result<(), AppError> {
        let mut storage = self.storage.write().await;
        let mut film = storage
            .find_by_id(film_id)
            .ok_or_else(|| AppError::NotFound(format!("film with id {film_id}")))?;
        film.add_like(user_id);
        storage.update(film);
        debug!(film_id, user_id, "like added");
        Ok(())
    }

    /// Remove a like; idempotent when the user never liked the film
    pub async fn remove_like(&self, film_id: i64, user_id: i64) -> Result<(), AppError> {
        let mut storage = self.storage.write().await;
        let mut film = storage
            .find_by_id(film_id)
            .ok_or_else(|| AppError::NotFound(format!("film with id {film_id}")))?;
        film.remove_like(user_id);
        storage.update(film);
        debug!(film_id, user_id, "like removed");
        Ok(())
    }

    /// Films ranked by descending like-count, truncated to `count`
    pub async fn popular(&self, count: i64) -> Vec<Film> {
        self.storage.read().await.find_popular(count)
    }
}

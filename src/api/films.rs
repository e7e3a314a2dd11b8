//! Film API handlers
//!
//! HTTP request handlers for film CRUD, likes, and the popularity query.

use crate::api::MessageResponse;
use crate::error::AppError;
use crate::model::Film;
use crate::service::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Query parameters for GET /films/popular
#[derive(Deserialize)]
pub struct PopularParams {
    /// Number of films to return; falls back to the configured default
    pub count: Option<i64>,
}

/// GET /films - List all films
pub async fn list_films(State(state): State<Arc<AppState>>) -> Json<Vec<Film>> {
    let films = state.films.list().await;
    info!(count = films.len(), "listed films");
    Json(films)
}

/// GET /films/:id - Get a specific film
pub async fn get_film(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Film>, AppError> {
    Ok(Json(state.films.get(id).await?))
}

/// GET /films/popular?count=N - Most-liked films first
pub async fn popular_films(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PopularParams>,
) -> Json<Vec<Film>> {
    let count = params.count.unwrap_or(state.default_popular_count);
    Json(state.films.popular(count).await)
}

/// POST /films - Create a new film
pub async fn create_film(
    State(state): State<Arc<AppState>>,
    Json(film): Json<Film>,
) -> Result<(StatusCode, Json<Film>), AppError> {
    let stored = state.films.create(film).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /films - Update an existing film (full replacement)
pub async fn update_film(
    State(state): State<Arc<AppState>>,
    Json(film): Json<Film>,
) -> Result<Json<Film>, AppError> {
    Ok(Json(state.films.update(film).await?))
}

/// DELETE /films/:id - Delete a film
pub async fn delete_film(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.films.delete(id).await?;
    Ok(Json(MessageResponse::ok("film deleted")))
}

/// PUT /films/:id/like/:user_id - Record a like
pub async fn add_like(
    State(state): State<Arc<AppState>>,
    Path((film_id, user_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, AppError> {
    if user_id < 0 {
        return Err(AppError::InvalidInput(format!(
            "user id {user_id} must not be negative"
        )));
    }
    state.films.add_like(film_id, user_id).await?;
    Ok(Json(MessageResponse::ok("like added")))
}

/// DELETE /films/:id/like/:user_id - Remove a like
pub async fn remove_like(
    State(state): State<Arc<AppState>>,
    Path((film_id, user_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, AppError> {
    if user_id < 0 {
        return Err(AppError::InvalidInput(format!(
            "user id {user_id} must not be negative"
        )));
    }
    state.films.remove_like(film_id, user_id).await?;
    Ok(Json(MessageResponse::ok("like removed")))
}

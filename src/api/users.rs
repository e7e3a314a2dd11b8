//! User API handlers
//!
//! HTTP request handlers for user CRUD and the friendship endpoints.

use crate::api::MessageResponse;
use crate::error::AppError;
use crate::model::User;
use crate::service::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::info;

fn reject_negative(id: i64, what: &str) -> Result<(), AppError> {
    if id < 0 {
        return Err(AppError::InvalidInput(format!(
            "{what} {id} must not be negative"
        )));
    }
    Ok(())
}

/// GET /users - List all users
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    let users = state.users.list().await;
    info!(count = users.len(), "listed users");
    Json(users)
}

/// GET /users/:id - Get a specific user
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.users.get(id).await?))
}

/// POST /users - Create a new user (display name normalized to login)
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(user): Json<User>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let stored = state.users.create(user).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /users - Update an existing user (full replacement)
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Json(user): Json<User>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.users.update(user).await?))
}

/// DELETE /users/:id - Delete a user
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.users.delete(id).await?;
    Ok(Json(MessageResponse::ok("user deleted")))
}

/// PUT /users/:id/friends/:friend_id - Link two users as friends
pub async fn add_friend(
    State(state): State<Arc<AppState>>,
    Path((user_id, friend_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, AppError> {
    reject_negative(friend_id, "friend id")?;
    state.users.add_friend(user_id, friend_id).await?;
    Ok(Json(MessageResponse::ok("friend added")))
}

/// DELETE /users/:id/friends/:friend_id - Unlink two users
pub async fn remove_friend(
    State(state): State<Arc<AppState>>,
    Path((user_id, friend_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, AppError> {
    reject_negative(friend_id, "friend id")?;
    state.users.remove_friend(user_id, friend_id).await?;
    Ok(Json(MessageResponse::ok("friend removed")))
}

/// GET /users/:id/friends - A user's friends as full records
pub async fn list_friends(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<User>>, AppError> {
    let friends = state.users.friends(id).await?;
    info!(user_id = id, count = friends.len(), "listed friends");
    Ok(Json(friends))
}

/// GET /users/:id/friends/common/:other_id - Friends both users share
pub async fn common_friends(
    State(state): State<Arc<AppState>>,
    Path((user_id, other_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<User>>, AppError> {
    let common = state.users.common_friends(user_id, other_id).await?;
    info!(user_id, other_id, count = common.len(), "listed common friends");
    Ok(Json(common))
}

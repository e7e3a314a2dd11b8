//! Film endpoint tests driving the handlers directly

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use filmclub_backend::api::films;
use filmclub_backend::config::CatalogConfig;
use filmclub_backend::error::AppError;
use filmclub_backend::model::Film;
use filmclub_backend::service::AppState;
use std::collections::HashSet;
use std::sync::Arc;

fn test_state() -> Arc<AppState> {
    AppState::new(&CatalogConfig {
        default_popular_count: 10,
    })
}

fn film(name: &str, description: &str, date: (i32, u32, u32), duration: i64) -> Film {
    Film {
        id: 0,
        name: name.to_string(),
        description: description.to_string(),
        release_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        duration,
        likes: HashSet::new(),
    }
}

#[tokio::test]
async fn create_assigns_id_and_returns_201() {
    let state = test_state();
    let (status, Json(stored)) = films::create_film(
        State(state.clone()),
        Json(film("Film1", "Comedy", (2020, 10, 25), 120)),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(stored.id, 1);

    let Json(all) = films::list_films(State(state)).await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Film1");
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let state = test_state();

    let too_long = film("Film1", &"x".repeat(201), (2020, 10, 25), 120);
    assert!(matches!(
        films::create_film(State(state.clone()), Json(too_long)).await,
        Err(AppError::InvalidInput(_))
    ));

    let too_old = film("Film1", "Comedy", (1895, 12, 27), 120);
    assert!(matches!(
        films::create_film(State(state.clone()), Json(too_old)).await,
        Err(AppError::InvalidInput(_))
    ));

    let Json(all) = films::list_films(State(state)).await;
    assert!(all.is_empty());
}

#[tokio::test]
async fn get_unknown_film_is_not_found() {
    let state = test_state();
    let result = films::get_film(State(state), Path(42)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn update_with_unassigned_id_is_not_found() {
    let state = test_state();
    let mut ghost = film("Ghost", "Drama", (2020, 10, 25), 90);
    ghost.id = 7;
    let result = films::update_film(State(state), Json(ghost)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn update_replaces_the_film() {
    let state = test_state();
    let (_, Json(stored)) = films::create_film(
        State(state.clone()),
        Json(film("Film1", "Comedy", (2020, 10, 25), 120)),
    )
    .await
    .unwrap();

    let mut changed = stored.clone();
    changed.name = "Film1 Redux".to_string();
    let Json(updated) = films::update_film(State(state.clone()), Json(changed))
        .await
        .unwrap();
    assert_eq!(updated.name, "Film1 Redux");

    let Json(fetched) = films::get_film(State(state), Path(stored.id)).await.unwrap();
    assert_eq!(fetched.name, "Film1 Redux");
}

#[tokio::test]
async fn popular_ranks_films_by_likes() {
    let state = test_state();
    films::create_film(
        State(state.clone()),
        Json(film("Film1", "Comedy", (2020, 10, 25), 120)),
    )
    .await
    .unwrap();
    films::create_film(
        State(state.clone()),
        Json(film("Film", "Horror", (2020, 10, 25), 100)),
    )
    .await
    .unwrap();

    films::add_like(State(state.clone()), Path((1, 5))).await.unwrap();
    films::add_like(State(state.clone()), Path((2, 1))).await.unwrap();
    films::add_like(State(state.clone()), Path((2, 3))).await.unwrap();
    films::add_like(State(state.clone()), Path((2, 5))).await.unwrap();

    let Json(popular) = films::popular_films(
        State(state),
        Query(films::PopularParams { count: Some(2) }),
    )
    .await;

    assert_eq!(popular.len(), 2);
    assert_eq!(popular[0].id, 2);
    assert_eq!(popular[0].likes.len(), 3);
    assert_eq!(popular[1].id, 1);
    assert_eq!(popular[1].likes.len(), 1);
}

#[tokio::test]
async fn popular_without_count_uses_the_configured_default() {
    let state = AppState::new(&CatalogConfig {
        default_popular_count: 1,
    });
    films::create_film(
        State(state.clone()),
        Json(film("Film1", "Comedy", (2020, 10, 25), 120)),
    )
    .await
    .unwrap();
    films::create_film(
        State(state.clone()),
        Json(film("Film2", "Horror", (2020, 10, 25), 100)),
    )
    .await
    .unwrap();

    let Json(popular) =
        films::popular_films(State(state), Query(films::PopularParams { count: None })).await;
    assert_eq!(popular.len(), 1);
}

#[tokio::test]
async fn like_endpoints_reject_negative_user_ids() {
    let state = test_state();
    films::create_film(
        State(state.clone()),
        Json(film("Film1", "Comedy", (2020, 10, 25), 120)),
    )
    .await
    .unwrap();

    assert!(matches!(
        films::add_like(State(state.clone()), Path((1, -5))).await,
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        films::remove_like(State(state), Path((1, -5))).await,
        Err(AppError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn like_of_unknown_film_is_not_found() {
    let state = test_state();
    assert!(matches!(
        films::add_like(State(state), Path((99, 1))).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn unlike_restores_prior_like_set() {
    let state = test_state();
    films::create_film(
        State(state.clone()),
        Json(film("Film1", "Comedy", (2020, 10, 25), 120)),
    )
    .await
    .unwrap();

    films::add_like(State(state.clone()), Path((1, 5))).await.unwrap();
    films::remove_like(State(state.clone()), Path((1, 5))).await.unwrap();

    let Json(fetched) = films::get_film(State(state), Path(1)).await.unwrap();
    assert!(fetched.likes.is_empty());
}

#[tokio::test]
async fn delete_removes_the_film() {
    let state = test_state();
    films::create_film(
        State(state.clone()),
        Json(film("Film1", "Comedy", (2020, 10, 25), 120)),
    )
    .await
    .unwrap();

    films::delete_film(State(state.clone()), Path(1)).await.unwrap();
    assert!(matches!(
        films::get_film(State(state.clone()), Path(1)).await,
        Err(AppError::NotFound(_))
    ));

    // ids are never reused after a delete
    let (_, Json(next)) = films::create_film(
        State(state),
        Json(film("Film2", "Horror", (2020, 10, 25), 100)),
    )
    .await
    .unwrap();
    assert_eq!(next.id, 2);
}

//! Service layer for business logic
//!
//! Services own the mutual-exclusion boundary around their storage: every
//! mutation runs under one write-lock acquisition, so creates, updates,
//! deletes, and like/friend set changes are linearizable per storage.

pub mod films;
pub mod users;

pub use films::FilmService;
pub use users::UserService;

use crate::config::CatalogConfig;
use std::sync::Arc;

/// Shared application state: one service (and one lock) per storage instance
#[derive(Debug)]
pub struct AppState {
    /// Film catalog service
    pub films: FilmService,
    /// User and friendship service
    pub users: UserService,
    /// Default count for the popular-films query
    pub default_popular_count: i64,
}

impl AppState {
    /// Create application state from the catalog configuration
    pub fn new(catalog: &CatalogConfig) -> Arc<Self> {
        Arc::new(Self {
            films: FilmService::new(),
            users: UserService::new(),
            default_popular_count: catalog.default_popular_count,
        })
    }
}

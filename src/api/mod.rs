//! API module
//!
//! Contains HTTP request handlers for the film and user endpoints

pub mod films;
pub mod users;

use serde::Serialize;

/// Message response for endpoints with no entity payload
#[derive(Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
    /// Status indicator (e.g., "ok")
    pub status: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: "ok".to_string(),
        }
    }
}

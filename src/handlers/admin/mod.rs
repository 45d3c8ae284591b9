//! Moderation API handlers
//!
//! JSON endpoints behind the access guard in API mode. The console pages
//! call these for every moderation button.

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    routing::{delete, post},
    Router,
};

use crate::state::AppState;

/// Moderation routes, relative to the admin API root
pub fn routes() -> Router<AppState> {
    Router::new()
        // User moderation
        .route("/users/{id}/verify", post(handler::verify_user))
        .route("/users/{id}/suspend", post(handler::suspend_user))
        .route("/users/{id}/activate", post(handler::activate_user))
        .route("/users/{id}", delete(handler::delete_user))
        // Item moderation
        .route("/items/{id}/publish", post(handler::publish_item))
        .route("/items/{id}/reject", post(handler::reject_item))
        .route("/items/{id}", delete(handler::delete_item))
}

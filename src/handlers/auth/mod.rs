//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{constants::paths, state::AppState};

/// Public routes: root, login, logout and the unauthorized page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(paths::ROOT, get(handler::redirect_to_login))
        .route(paths::LOGIN, get(handler::login_page).post(handler::login))
        .route(paths::LOGOUT, post(handler::logout))
        .route(paths::UNAUTHORIZED, get(handler::unauthorized_page))
}

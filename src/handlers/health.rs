//! Liveness endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::{constants::paths, state::AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn routes() -> Router<AppState> {
    Router::new().route(paths::HEALTH, get(health_check))
}

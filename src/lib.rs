//! Campus Bazaar Admin - moderation console for a university marketplace
//!
//! This library provides the backend of the admin console that sits in
//! front of the Campus Bazaar marketplace REST API.
//!
//! # Features
//!
//! - Per-session identity resolution, shared by every consumer
//! - Role-gated console pages and moderation API
//! - Sidebar navigation derived from the caller's role
//! - User and listing moderation, dashboard analytics
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **API**: Marketplace REST client
//! - **Models**: Marketplace records and view models

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod middleware;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

//! Business logic services

pub mod auth_service;
pub mod dashboard_service;
pub mod item_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use dashboard_service::DashboardService;
pub use item_service::ItemService;
pub use user_service::UserService;

//! Authentication response DTOs

use serde::Serialize;

use crate::models::Role;

/// Login page view model
#[derive(Debug, Serialize)]
pub struct LoginPageResponse {
    pub title: &'static str,
    pub description: &'static str,
    pub email_domain: String,
    pub min_password_length: u64,
}

/// Successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub redirect_to: &'static str,
    pub user: LoginUserResponse,
}

/// The account that just logged in
#[derive(Debug, Serialize)]
pub struct LoginUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Page shown to authenticated accounts without console access
#[derive(Debug, Serialize)]
pub struct UnauthorizedPageResponse {
    pub title: &'static str,
    pub message: &'static str,
    pub login_path: &'static str,
}

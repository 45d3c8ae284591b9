//! Authentication service

use tracing::{info, warn};

use crate::{
    api::{Credentials, LoginSession, MarketplaceApi},
    error::{AppError, AppResult},
};

/// Console login and logout against the marketplace API
pub struct AuthService;

impl AuthService {
    /// Log in and make sure the account may use the console.
    ///
    /// Non-privileged accounts are refused even though the marketplace
    /// accepted their credentials.
    pub async fn login(api: &dyn MarketplaceApi, email: &str, password: &str) -> AppResult<LoginSession> {
        let credentials = Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let session = api.login(&credentials).await?;
        let role = session.user.active_role;

        if !role.is_privileged() {
            warn!(user_id = %session.user.id, role = %role, "Console login refused");
            return Err(AppError::Forbidden("Admin access only".to_string()));
        }

        info!(user_id = %session.user.id, role = %role, "Console login");
        Ok(session)
    }

    /// Log out upstream. Failures are logged; the local session ends anyway.
    pub async fn logout(api: &dyn MarketplaceApi, token: &str) {
        if let Err(e) = api.logout(token).await {
            warn!(error = %e, "Marketplace logout failed");
        }
    }
}

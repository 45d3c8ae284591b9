//! User moderation service

use tracing::info;

use crate::{
    api::{MarketplaceApi, Page, UserStatusUpdate, UsersQuery},
    error::AppResult,
    models::{Status, User, UserAction},
};

/// User listing and moderation
pub struct UserService;

impl UserService {
    pub async fn list(api: &dyn MarketplaceApi, token: &str, query: &UsersQuery) -> AppResult<Page<User>> {
        api.list_users(token, query).await
    }

    /// Apply a moderation action and return the confirmation message
    pub async fn moderate(
        api: &dyn MarketplaceApi,
        token: &str,
        user_id: &str,
        action: UserAction,
    ) -> AppResult<&'static str> {
        match status_update(action) {
            Some(update) => api.update_user_status(token, user_id, update).await?,
            None => api.delete_user(token, user_id).await?,
        }

        info!(user_id = %user_id, action = ?action, "User moderated");
        Ok(success_message(action))
    }
}

/// Status change an action maps to; `None` for deletion
fn status_update(action: UserAction) -> Option<UserStatusUpdate> {
    match action {
        UserAction::Verify => Some(UserStatusUpdate {
            is_status: Status::Active,
            is_verified: Some(true),
        }),
        UserAction::Suspend => Some(UserStatusUpdate {
            is_status: Status::Suspend,
            is_verified: None,
        }),
        UserAction::Activate => Some(UserStatusUpdate {
            is_status: Status::Active,
            is_verified: None,
        }),
        UserAction::Delete => None,
    }
}

fn success_message(action: UserAction) -> &'static str {
    match action {
        UserAction::Verify => "User verified and activated successfully",
        UserAction::Suspend => "User suspended successfully",
        UserAction::Activate => "User activated successfully",
        UserAction::Delete => "User deleted successfully",
    }
}

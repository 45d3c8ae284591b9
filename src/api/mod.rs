//! Marketplace API client layer
//!
//! Every console mutation and every table is a single round trip to the
//! marketplace REST API. [`MarketplaceApi`] is the seam handlers and the
//! identity resolver depend on; [`HttpMarketplaceApi`] is the real client.

mod client;

pub use client::HttpMarketplaceApi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{
        DashboardStats, IdentityRecord, Item, ItemStatus, PageMeta, RecentActivity, Status, User,
    },
};

/// Login form forwarded to `/auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub user: User,
    pub access_token: String,
}

/// One page of records plus its pagination meta
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub meta: PageMeta,
}

/// Filters for `/admin/users`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_status: Option<Status>,
}

/// Filters for `/admin/items`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_category: Option<String>,
}

/// Body of `PATCH /admin/users/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusUpdate {
    pub is_status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

/// Operations the console performs against the marketplace API.
///
/// `token` is the caller's marketplace access token, forwarded as a bearer
/// credential.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> AppResult<LoginSession>;

    async fn logout(&self, token: &str) -> AppResult<()>;

    /// `Ok(None)` when the API does not recognize the session
    async fn current_user(&self, token: &str) -> AppResult<Option<IdentityRecord>>;

    async fn list_users(&self, token: &str, query: &UsersQuery) -> AppResult<Page<User>>;

    async fn update_user_status(
        &self,
        token: &str,
        user_id: &str,
        update: UserStatusUpdate,
    ) -> AppResult<()>;

    async fn delete_user(&self, token: &str, user_id: &str) -> AppResult<()>;

    async fn list_items(&self, token: &str, query: &ItemsQuery) -> AppResult<Page<Item>>;

    async fn update_item_status(
        &self,
        token: &str,
        item_id: &str,
        status: ItemStatus,
    ) -> AppResult<()>;

    async fn delete_item(&self, token: &str, item_id: &str) -> AppResult<()>;

    async fn dashboard_stats(&self, token: &str) -> AppResult<DashboardStats>;

    async fn recent_activity(&self, token: &str, limit: Option<u32>) -> AppResult<RecentActivity>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_query_skips_empty_filters() {
        let query = UsersQuery {
            page: Some(2),
            limit: Some(10),
            is_status: Some(Status::Suspend),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 2, "limit": 10, "isStatus": "SUSPEND"})
        );
    }

    #[test]
    fn test_status_update_omits_verification_when_unset() {
        let update = UserStatusUpdate {
            is_status: Status::Active,
            is_verified: None,
        };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            serde_json::json!({"isStatus": "ACTIVE"})
        );
    }
}

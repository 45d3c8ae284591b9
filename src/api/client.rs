//! reqwest-backed marketplace client

use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::{
    config::UpstreamConfig,
    error::{AppError, AppResult},
    models::{
        ApiErrorBody, ApiResponse, DashboardStats, IdentityRecord, Item, ItemStatus, PageMeta,
        RecentActivity, User,
    },
};

use super::{
    Credentials, ItemsQuery, LoginSession, MarketplaceApi, Page, UserStatusUpdate, UsersQuery,
};

/// HTTP client for the marketplace REST API
#[derive(Debug, Clone)]
pub struct HttpMarketplaceApi {
    client: Client,
    base_url: String,
}

impl HttpMarketplaceApi {
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode the envelope, mapping non-2xx answers to
    /// [`AppError::Upstream`] with the API's own message
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<ApiResponse<T>> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            let message = body.message.unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Marketplace request failed")
                    .to_string()
            });
            debug!(status = %status.as_u16(), message = %message, "Marketplace call rejected");
            return Err(AppError::Upstream { status, message });
        }

        Ok(response.json::<ApiResponse<T>>().await?)
    }

    async fn send_page<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        limit: Option<u32>,
    ) -> AppResult<Page<T>> {
        let envelope = self.send::<Vec<T>>(request).await?;
        let meta = envelope
            .meta
            .unwrap_or_else(|| PageMeta::empty(limit.unwrap_or(crate::constants::DEFAULT_PAGE_SIZE)));

        Ok(Page {
            records: envelope.data,
            meta,
        })
    }
}

#[async_trait]
impl MarketplaceApi for HttpMarketplaceApi {
    async fn login(&self, credentials: &Credentials) -> AppResult<LoginSession> {
        let request = self.client.post(self.url("/auth/login")).json(credentials);
        Ok(self.send::<LoginSession>(request).await?.data)
    }

    async fn logout(&self, token: &str) -> AppResult<()> {
        let request = self.client.post(self.url("/auth/logout")).bearer_auth(token);
        self.send::<serde_json::Value>(request).await?;
        Ok(())
    }

    async fn current_user(&self, token: &str) -> AppResult<Option<IdentityRecord>> {
        let request = self.client.get(self.url("/user/me")).bearer_auth(token);

        match self.send::<Option<IdentityRecord>>(request).await {
            Ok(envelope) => Ok(envelope.data),
            // An expired or foreign token is "no identity", not a failure
            Err(AppError::Upstream { status, .. })
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN =>
            {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn list_users(&self, token: &str, query: &UsersQuery) -> AppResult<Page<User>> {
        let request = self
            .client
            .get(self.url("/admin/users"))
            .bearer_auth(token)
            .query(query);
        self.send_page(request, query.limit).await
    }

    async fn update_user_status(
        &self,
        token: &str,
        user_id: &str,
        update: UserStatusUpdate,
    ) -> AppResult<()> {
        let request = self
            .client
            .patch(self.url(&format!("/admin/users/{user_id}/status")))
            .bearer_auth(token)
            .json(&update);
        self.send::<serde_json::Value>(request).await?;
        Ok(())
    }

    async fn delete_user(&self, token: &str, user_id: &str) -> AppResult<()> {
        let request = self
            .client
            .delete(self.url(&format!("/admin/users/{user_id}")))
            .bearer_auth(token);
        self.send::<serde_json::Value>(request).await?;
        Ok(())
    }

    async fn list_items(&self, token: &str, query: &ItemsQuery) -> AppResult<Page<Item>> {
        let request = self
            .client
            .get(self.url("/admin/items"))
            .bearer_auth(token)
            .query(query);
        self.send_page(request, query.limit).await
    }

    async fn update_item_status(
        &self,
        token: &str,
        item_id: &str,
        status: ItemStatus,
    ) -> AppResult<()> {
        let request = self
            .client
            .patch(self.url(&format!("/admin/items/{item_id}/status")))
            .bearer_auth(token)
            .json(&json!({ "status": status }));
        self.send::<serde_json::Value>(request).await?;
        Ok(())
    }

    async fn delete_item(&self, token: &str, item_id: &str) -> AppResult<()> {
        let request = self
            .client
            .delete(self.url(&format!("/admin/items/{item_id}")))
            .bearer_auth(token);
        self.send::<serde_json::Value>(request).await?;
        Ok(())
    }

    async fn dashboard_stats(&self, token: &str) -> AppResult<DashboardStats> {
        let request = self
            .client
            .get(self.url("/admin/dashboard/stats"))
            .bearer_auth(token);
        Ok(self.send::<DashboardStats>(request).await?.data)
    }

    async fn recent_activity(&self, token: &str, limit: Option<u32>) -> AppResult<RecentActivity> {
        let mut request = self
            .client
            .get(self.url("/admin/dashboard/recent-activity"))
            .bearer_auth(token);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        Ok(self.send::<RecentActivity>(request).await?.data)
    }
}

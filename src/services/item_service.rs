//! Item moderation service

use tracing::info;

use crate::{
    api::{ItemsQuery, MarketplaceApi, Page},
    error::AppResult,
    models::{Item, ItemAction, ItemStatus},
};

/// Listing moderation
pub struct ItemService;

impl ItemService {
    pub async fn list(api: &dyn MarketplaceApi, token: &str, query: &ItemsQuery) -> AppResult<Page<Item>> {
        api.list_items(token, query).await
    }

    /// Apply a moderation action and return the confirmation message
    pub async fn moderate(
        api: &dyn MarketplaceApi,
        token: &str,
        item_id: &str,
        action: ItemAction,
    ) -> AppResult<&'static str> {
        let message = match action {
            ItemAction::Publish => {
                api.update_item_status(token, item_id, ItemStatus::Published).await?;
                "Item published successfully"
            }
            ItemAction::Reject => {
                api.update_item_status(token, item_id, ItemStatus::Cancel).await?;
                "Item rejected successfully"
            }
            ItemAction::Delete => {
                api.delete_item(token, item_id).await?;
                "Item deleted successfully"
            }
        };

        info!(item_id = %item_id, action = ?action, "Item moderated");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::MockMarketplaceApi, error::AppError};
    use axum::http::StatusCode;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_reject_sets_cancel() {
        let mut api = MockMarketplaceApi::new();
        api.expect_update_item_status()
            .with(eq("tok"), eq("i3"), eq(ItemStatus::Cancel))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let message = ItemService::moderate(&api, "tok", "i3", ItemAction::Reject)
            .await
            .unwrap();
        assert_eq!(message, "Item rejected successfully");
    }

    #[tokio::test]
    async fn test_upstream_error_is_propagated() {
        let mut api = MockMarketplaceApi::new();
        api.expect_update_item_status().returning(|_, _, _| {
            Err(AppError::Upstream {
                status: StatusCode::NOT_FOUND,
                message: "Item not found".to_string(),
            })
        });

        let err = ItemService::moderate(&api, "tok", "missing", ItemAction::Publish)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Item not found");
    }
}

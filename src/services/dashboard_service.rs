//! Dashboard service

use crate::{
    api::MarketplaceApi,
    error::AppResult,
    models::{DashboardStats, RecentActivity},
};

/// Aggregates for the analytics page
pub struct DashboardService;

impl DashboardService {
    /// Fetch stats and recent activity concurrently
    pub async fn overview(
        api: &dyn MarketplaceApi,
        token: &str,
        recent_limit: u32,
    ) -> AppResult<(DashboardStats, RecentActivity)> {
        futures::try_join!(
            api.dashboard_stats(token),
            api.recent_activity(token, Some(recent_limit))
        )
    }
}

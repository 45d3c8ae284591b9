//! Dashboard aggregates

use serde::{Deserialize, Serialize};

/// Aggregate counts shown on the analytics page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub active_users: u64,
    pub pending_users: u64,
    pub suspended_users: u64,
    pub total_items: u64,
    pub published_items: u64,
    pub pending_items: u64,
    pub canceled_items: u64,
}

/// Latest registrations and listings.
///
/// Entries are kept as raw JSON; the API returns partially populated
/// records here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    #[serde(default)]
    pub recent_users: Vec<serde_json::Value>,
    #[serde(default)]
    pub recent_items: Vec<serde_json::Value>,
}

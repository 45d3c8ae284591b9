//! Page view models

use serde::Serialize;

use crate::{
    models::{
        DashboardStats, Item, ItemAction, PageMeta, RecentActivity, SessionIdentity, User,
        UserAction,
    },
    navigation::{sidebar_items, NavigationGroup},
};

/// Every console page is rendered inside the layout: sidebar, signed-in
/// user, page body
#[derive(Debug, Serialize)]
pub struct LayoutResponse<T> {
    pub sidebar: Vec<NavigationGroup>,
    pub user: SessionIdentity,
    pub page: T,
}

impl<T> LayoutResponse<T> {
    pub fn new(identity: SessionIdentity, page: T) -> Self {
        Self {
            sidebar: sidebar_items(Some(identity.role)),
            user: identity,
            page,
        }
    }
}

/// Pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

impl From<PageMeta> for Pagination {
    fn from(meta: PageMeta) -> Self {
        let total_pages = meta.effective_total_pages();
        let page = meta.page.max(1);
        Self {
            page,
            limit: meta.limit,
            total: meta.total,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyticsPage {
    pub stats: DashboardStats,
    pub recent_activity: RecentActivity,
}

#[derive(Debug, Serialize)]
pub struct UserRow {
    #[serde(flatten)]
    pub user: User,
    pub actions: Vec<UserAction>,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            actions: user.available_actions(),
            user,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UsersPage {
    pub users: Vec<UserRow>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct ItemRow {
    #[serde(flatten)]
    pub item: Item,
    pub owner_name: Option<String>,
    pub actions: Vec<ItemAction>,
}

impl From<Item> for ItemRow {
    fn from(item: Item) -> Self {
        Self {
            owner_name: item.owner_name().map(str::to_string),
            actions: item.available_actions(),
            item,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemsPage {
    pub items: Vec<ItemRow>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct ProfilePage {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: crate::models::Role,
    pub is_verified: bool,
}

impl From<&SessionIdentity> for ProfilePage {
    fn from(identity: &SessionIdentity) -> Self {
        Self {
            id: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role,
            is_verified: identity.is_verified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_from_meta() {
        let pagination = Pagination::from(PageMeta {
            total: 25,
            page: 2,
            limit: 10,
            total_pages: 0,
        });
        assert_eq!(pagination.total_pages, 3);
        assert!(pagination.has_previous);
        assert!(pagination.has_next);

        let last = Pagination::from(PageMeta {
            total: 25,
            page: 3,
            limit: 10,
            total_pages: 3,
        });
        assert!(!last.has_next);
    }
}

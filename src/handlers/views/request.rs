//! Page query parameters

use serde::Deserialize;

use crate::{
    api::{ItemsQuery, UsersQuery},
    constants::{DEFAULT_PAGE_SIZE, DEFAULT_RECENT_ACTIVITY_LIMIT, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    models::Role,
    utils::parse_filter,
};

/// Analytics page query
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub recent_limit: Option<u32>,
}

impl AnalyticsQuery {
    pub fn recent_limit(&self) -> u32 {
        self.recent_limit
            .unwrap_or(DEFAULT_RECENT_ACTIVITY_LIMIT)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

/// Manage-users page query
#[derive(Debug, Default, Deserialize)]
pub struct UsersPageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// `PENDING`, `ACTIVE`, `SUSPEND` or `ALL`
    pub status: Option<String>,
    pub role: Option<String>,
    pub search: Option<String>,
}

impl UsersPageQuery {
    pub fn to_api_query(&self) -> AppResult<UsersQuery> {
        Ok(UsersQuery {
            page: Some(page(self.page)),
            limit: Some(limit(self.limit)),
            search_term: search(self.search.as_deref()),
            active_role: role_filter(self.role.as_deref())?,
            is_status: parse_filter(self.status.as_deref()).map_err(AppError::InvalidInput)?,
        })
    }
}

/// Manage-items page query
#[derive(Debug, Default, Deserialize)]
pub struct ItemsPageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// `PENDING`, `PUBLISHED`, `CANCEL` or `ALL`
    pub status: Option<String>,
    pub selling_category: Option<String>,
    pub object_category: Option<String>,
    pub search: Option<String>,
}

impl ItemsPageQuery {
    pub fn to_api_query(&self) -> AppResult<ItemsQuery> {
        Ok(ItemsQuery {
            page: Some(page(self.page)),
            limit: Some(limit(self.limit)),
            search_term: search(self.search.as_deref()),
            status: parse_filter(self.status.as_deref()).map_err(AppError::InvalidInput)?,
            selling_category: category(self.selling_category.as_deref()),
            object_category: category(self.object_category.as_deref()),
        })
    }
}

fn role_filter(value: Option<&str>) -> AppResult<Option<String>> {
    match parse_filter::<Role>(value).map_err(AppError::InvalidInput)? {
        Some(Role::Unknown) => Err(AppError::InvalidInput(format!(
            "Invalid role filter: {}",
            value.unwrap_or_default()
        ))),
        role => Ok(role.map(|role| role.as_str().to_string())),
    }
}

fn page(page: Option<u32>) -> u32 {
    page.unwrap_or(1).max(1)
}

fn limit(limit: Option<u32>) -> u32 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

fn search(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

// Categories are forwarded untouched; the API owns their vocabulary
fn category(value: Option<&str>) -> Option<String> {
    search(value).filter(|v| !v.eq_ignore_ascii_case(crate::constants::FILTER_ALL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemStatus, Status};

    #[test]
    fn test_users_query_defaults() {
        let query = UsersPageQuery::default().to_api_query().unwrap();
        assert_eq!(query.page, Some(1));
        assert_eq!(query.limit, Some(DEFAULT_PAGE_SIZE));
        assert!(query.is_status.is_none());
        assert!(query.search_term.is_none());
    }

    #[test]
    fn test_users_query_filters() {
        let query = UsersPageQuery {
            page: Some(0),
            limit: Some(500),
            status: Some("ACTIVE".to_string()),
            role: Some("seller".to_string()),
            search: Some("  rahim ".to_string()),
        }
        .to_api_query()
        .unwrap();
        assert_eq!(query.page, Some(1));
        assert_eq!(query.limit, Some(MAX_PAGE_SIZE));
        assert_eq!(query.is_status, Some(Status::Active));
        assert_eq!(query.active_role.as_deref(), Some("SELLER"));
        assert_eq!(query.search_term.as_deref(), Some("rahim"));
    }

    #[test]
    fn test_all_status_means_no_filter() {
        let query = UsersPageQuery {
            status: Some("ALL".to_string()),
            ..Default::default()
        }
        .to_api_query()
        .unwrap();
        assert!(query.is_status.is_none());
    }

    #[test]
    fn test_unknown_role_filter_is_rejected() {
        let result = UsersPageQuery {
            role: Some("moderator".to_string()),
            ..Default::default()
        }
        .to_api_query();
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        let result = ItemsPageQuery {
            status: Some("SOLD".to_string()),
            ..Default::default()
        }
        .to_api_query();
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_items_query_filters() {
        let query = ItemsPageQuery {
            status: Some("published".to_string()),
            selling_category: Some("RENT".to_string()),
            object_category: Some("ALL".to_string()),
            ..Default::default()
        }
        .to_api_query()
        .unwrap();
        assert_eq!(query.status, Some(ItemStatus::Published));
        assert_eq!(query.selling_category.as_deref(), Some("RENT"));
        assert!(query.object_category.is_none());
    }
}

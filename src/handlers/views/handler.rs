//! Page handler implementations

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    middleware::{CurrentIdentity, SessionToken},
    services::{DashboardService, ItemService, UserService},
    state::AppState,
};

use super::{
    request::{AnalyticsQuery, ItemsPageQuery, UsersPageQuery},
    response::{AnalyticsPage, ItemsPage, LayoutResponse, ProfilePage, UsersPage},
};

/// Dashboard counts and recent activity
pub async fn analytics(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    SessionToken(token): SessionToken,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<Json<LayoutResponse<AnalyticsPage>>> {
    let (stats, recent_activity) =
        DashboardService::overview(state.api(), &token, query.recent_limit()).await?;

    Ok(Json(LayoutResponse::new(
        identity,
        AnalyticsPage {
            stats,
            recent_activity,
        },
    )))
}

/// User table with filters
pub async fn manage_users(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    SessionToken(token): SessionToken,
    Query(query): Query<UsersPageQuery>,
) -> AppResult<Json<LayoutResponse<UsersPage>>> {
    let api_query = query.to_api_query()?;
    let page = UserService::list(state.api(), &token, &api_query).await?;

    Ok(Json(LayoutResponse::new(
        identity,
        UsersPage {
            users: page.records.into_iter().map(Into::into).collect(),
            pagination: page.meta.into(),
        },
    )))
}

/// Item table with filters
pub async fn manage_items(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    SessionToken(token): SessionToken,
    Query(query): Query<ItemsPageQuery>,
) -> AppResult<Json<LayoutResponse<ItemsPage>>> {
    let api_query = query.to_api_query()?;
    let page = ItemService::list(state.api(), &token, &api_query).await?;

    Ok(Json(LayoutResponse::new(
        identity,
        ItemsPage {
            items: page.records.into_iter().map(Into::into).collect(),
            pagination: page.meta.into(),
        },
    )))
}

/// Signed-in admin's own profile
pub async fn profile(
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<LayoutResponse<ProfilePage>> {
    let page = ProfilePage::from(&identity);
    Json(LayoutResponse::new(identity, page))
}

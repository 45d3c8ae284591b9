//! Router assembly
//!
//! Protected pages are registered from the navigation table, so a page is
//! reachable by URL exactly when it appears in the privileged sidebar.

use axum::{
    middleware::{from_fn, from_fn_with_state},
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{
    constants::paths,
    handlers::{admin, auth, health},
    middleware::{access_guard_middleware, logging_middleware, AccessGuard},
    models::Role,
    navigation::{self, NavigationEntry},
    state::AppState,
};

/// Role the console's protected routes declare
pub const CONSOLE_ROLE: Role = Role::Admin;

/// Page routes registered behind the guard, in sidebar order
pub fn route_manifest() -> Vec<NavigationEntry> {
    let groups = navigation::sidebar_items(Some(CONSOLE_ROLE));
    navigation::entries(&groups).copied().collect()
}

async fn redirect_to_admin_home() -> Redirect {
    Redirect::to(paths::ADMIN_HOME)
}

fn protected_pages(state: AppState) -> Router<AppState> {
    let router = route_manifest()
        .into_iter()
        .fold(
            Router::new().route(paths::ADMIN_ROOT, get(redirect_to_admin_home)),
            |router, entry| router.route(entry.path, entry.view.method_router()),
        );

    router.route_layer(from_fn_with_state(
        AccessGuard::page(state, CONSOLE_ROLE),
        access_guard_middleware,
    ))
}

fn protected_api(state: AppState) -> Router<AppState> {
    admin::routes().route_layer(from_fn_with_state(
        AccessGuard::api(state, CONSOLE_ROLE),
        access_guard_middleware,
    ))
}

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_pages(state.clone()))
        .nest(paths::ADMIN_API_ROOT, protected_api(state.clone()))
        .layer(from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

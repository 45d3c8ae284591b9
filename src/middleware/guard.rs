//! Access guard for console routes
//!
//! Every protected request is re-evaluated against the current identity
//! state; nothing about the decision is cached.

use std::str::FromStr;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header::RETRY_AFTER, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    constants::{paths, LOADING_RETRY_AFTER_SECS},
    error::{AppError, UpstreamRejection},
    identity::IdentityState,
    models::{Role, SessionIdentity},
    state::AppState,
};

use super::session::{session_token, CurrentIdentity, SessionToken};

/// How the guard compares the caller's role with the required role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RolePolicy {
    /// Any privileged role passes, whatever role the route declares
    #[default]
    AnyPrivileged,
    /// The caller's role must rank at or above the declared role
    Hierarchical,
}

impl RolePolicy {
    pub fn permits(self, role: Role, required: Role) -> bool {
        match self {
            RolePolicy::AnyPrivileged => role.is_privileged(),
            RolePolicy::Hierarchical => role.is_privileged() && role.rank() >= required.rank(),
        }
    }
}

impl FromStr for RolePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "privileged" => Ok(RolePolicy::AnyPrivileged),
            "hierarchical" => Ok(RolePolicy::Hierarchical),
            _ => Err(()),
        }
    }
}

/// Outcome of guarding a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    RedirectLogin,
    RedirectUnauthorized,
    Render(SessionIdentity),
}

/// Decide what a guarded route renders for an identity state
pub fn decide(state: &IdentityState, required: Role, policy: RolePolicy) -> GuardDecision {
    match state {
        IdentityState::Loading => GuardDecision::Loading,
        IdentityState::Failed(_) | IdentityState::Ready(None) => GuardDecision::RedirectLogin,
        IdentityState::Ready(Some(identity)) if policy.permits(identity.role, required) => {
            GuardDecision::Render(identity.clone())
        }
        IdentityState::Ready(Some(_)) => GuardDecision::RedirectUnauthorized,
    }
}

/// Whether the guard answers like a page (redirects) or like an API (status codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardMode {
    Page,
    Api,
}

/// Middleware state: the app plus the role the wrapped routes declare
#[derive(Clone)]
pub struct AccessGuard {
    app: AppState,
    required: Role,
    mode: GuardMode,
}

impl AccessGuard {
    pub fn page(app: AppState, required: Role) -> Self {
        Self {
            app,
            required,
            mode: GuardMode::Page,
        }
    }

    pub fn api(app: AppState, required: Role) -> Self {
        Self {
            app,
            required,
            mode: GuardMode::Api,
        }
    }
}

/// Loading indicator body
#[derive(Debug, Serialize)]
pub struct LoadingResponse {
    pub status: &'static str,
    pub message: &'static str,
}

fn loading_response() -> Response {
    (
        StatusCode::ACCEPTED,
        [(RETRY_AFTER, LOADING_RETRY_AFTER_SECS.to_string())],
        Json(LoadingResponse {
            status: "loading",
            message: "Loading...",
        }),
    )
        .into_response()
}

/// The marketplace refused the token of an admitted session.
///
/// 401 means the session is gone: the cached identity is dropped and the
/// caller is sent to login. 403 may mean the role changed upstream: the
/// identity is looked up again and the refusal is passed through.
async fn session_rejected(
    guard: &AccessGuard,
    token: &str,
    status: StatusCode,
    response: Response,
) -> Response {
    let identity = guard.app.identity();

    if status == StatusCode::FORBIDDEN {
        warn!("Marketplace refused an admitted session, revalidating identity");
        identity.revalidate(token).await;
        return response;
    }

    warn!("Marketplace rejected the session token, dropping cached identity");
    identity.invalidate(token).await;
    match guard.mode {
        GuardMode::Page => Redirect::to(paths::LOGIN).into_response(),
        GuardMode::Api => AppError::Unauthorized.into_response(),
    }
}

/// Access guard middleware
pub async fn access_guard_middleware(
    State(guard): State<AccessGuard>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let config = guard.app.config();
    let token = session_token(request.headers(), &config.session.cookie_name);

    let identity_state = guard
        .app
        .identity()
        .settle(token.as_deref(), config.session.identity_wait())
        .await;

    let decision = decide(&identity_state, guard.required, config.access.role_policy);

    match (decision, token) {
        (GuardDecision::Render(identity), Some(token)) => {
            debug!(path = %path, user_id = %identity.id, role = %identity.role, "Access granted");
            request.extensions_mut().insert(SessionToken(token.clone()));
            request.extensions_mut().insert(CurrentIdentity(identity));
            let response = next.run(request).await;

            let rejection = response.extensions().get::<UpstreamRejection>().copied();
            match rejection {
                Some(UpstreamRejection(status)) => {
                    session_rejected(&guard, &token, status, response).await
                }
                None => response,
            }
        }
        (GuardDecision::Loading, _) => {
            debug!(path = %path, "Identity still loading");
            loading_response()
        }
        (GuardDecision::RedirectUnauthorized, _) => {
            debug!(path = %path, "Access denied: role not permitted");
            match guard.mode {
                GuardMode::Page => Redirect::to(paths::UNAUTHORIZED).into_response(),
                GuardMode::Api => {
                    AppError::Forbidden("Admin access required".to_string()).into_response()
                }
            }
        }
        // Render without a token cannot happen; treat it like no identity
        (GuardDecision::RedirectLogin | GuardDecision::Render(_), _) => {
            debug!(path = %path, "Access denied: not authenticated");
            match guard.mode {
                GuardMode::Page => Redirect::to(paths::LOGIN).into_response(),
                GuardMode::Api => AppError::Unauthorized.into_response(),
            }
        }
    }
}

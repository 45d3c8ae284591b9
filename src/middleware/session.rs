//! Session token transport
//!
//! The console keeps the marketplace access token in an HttpOnly cookie.
//! API clients may send it as a bearer token instead.

use axum::{
    extract::FromRequestParts,
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap,
    },
};

use crate::{config::SessionConfig, error::AppError, models::SessionIdentity};

/// Marketplace access token of the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(pub String);

/// Identity admitted by the access guard
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub SessionIdentity);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionToken>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentIdentity>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Read the session token from the session cookie, falling back to an
/// `Authorization: Bearer` header
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    cookie_value(headers, cookie_name).or_else(|| bearer_token(headers))
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// `Set-Cookie` value storing the session token
pub fn session_cookie(config: &SessionConfig, token: &str) -> String {
    let mut cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", config.cookie_name, token);
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value expiring the session cookie
pub fn clear_session_cookie(config: &SessionConfig) -> String {
    let mut cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        config.cookie_name
    );
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}

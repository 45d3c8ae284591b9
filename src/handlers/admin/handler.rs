//! Moderation API handler implementations

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    middleware::{CurrentIdentity, SessionToken},
    models::{ItemAction, UserAction},
    services::{ItemService, UserService},
    state::AppState,
};

use super::response::MessageResponse;

async fn moderate_user(
    state: &AppState,
    identity: &CurrentIdentity,
    token: &str,
    user_id: &str,
    action: UserAction,
) -> AppResult<Json<MessageResponse>> {
    // Admins cannot lock themselves out
    if user_id == identity.0.id && action != UserAction::Activate {
        return Err(AppError::Validation(
            "Cannot moderate your own account".to_string(),
        ));
    }

    let message = UserService::moderate(state.api(), token, user_id, action).await?;
    Ok(Json(MessageResponse { message }))
}

/// Verify a pending user and activate the account
pub async fn verify_user(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    SessionToken(token): SessionToken,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    moderate_user(&state, &identity, &token, &id, UserAction::Verify).await
}

/// Suspend an active user
pub async fn suspend_user(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    SessionToken(token): SessionToken,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    moderate_user(&state, &identity, &token, &id, UserAction::Suspend).await
}

/// Reactivate a suspended user
pub async fn activate_user(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    SessionToken(token): SessionToken,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    moderate_user(&state, &identity, &token, &id, UserAction::Activate).await
}

/// Permanently delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    SessionToken(token): SessionToken,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    moderate_user(&state, &identity, &token, &id, UserAction::Delete).await
}

/// Publish a listing
pub async fn publish_item(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let message = ItemService::moderate(state.api(), &token, &id, ItemAction::Publish).await?;
    Ok(Json(MessageResponse { message }))
}

/// Reject a listing
pub async fn reject_item(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let message = ItemService::moderate(state.api(), &token, &id, ItemAction::Reject).await?;
    Ok(Json(MessageResponse { message }))
}

/// Permanently delete a listing
pub async fn delete_item(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let message = ItemService::moderate(state.api(), &token, &id, ItemAction::Delete).await?;
    Ok(Json(MessageResponse { message }))
}

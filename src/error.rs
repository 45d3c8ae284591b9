//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Marketplace API errors
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("Marketplace API unavailable: {0}")]
    UpstreamUnavailable(String),

    // Internal errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Attached to responses for marketplace calls that rejected the session
/// token (401 or 403), so the access guard can drop the cached identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamRejection(pub StatusCode);

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            // Client errors from the marketplace are relayed as-is; anything
            // else means the upstream misbehaved.
            Self::Upstream { status, .. } if status.is_client_error() => *status,
            Self::Upstream { .. } | Self::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::UpstreamUnavailable(e) => {
                tracing::error!("Marketplace API unavailable: {}", e);
                "The marketplace service is unavailable".to_string()
            }
            AppError::Upstream { status, message } if status.is_server_error() => {
                tracing::error!(status = %status.as_u16(), "Marketplace API error: {}", message);
                message.clone()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
            },
        };

        let mut response = (status, Json(body)).into_response();
        if let AppError::Upstream { status, .. } = self {
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                response.extensions_mut().insert(UpstreamRejection(status));
            }
        }
        response
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AppError::Upstream {
                status: StatusCode::from_u16(status.as_u16())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                message: err.to_string(),
            },
            None => AppError::UpstreamUnavailable(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

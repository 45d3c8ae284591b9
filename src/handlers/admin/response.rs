//! Admin API response DTOs

use serde::Serialize;

/// Confirmation of a moderation action
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

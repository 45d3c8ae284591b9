//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MIN_PASSWORD_LENGTH;

/// Console login form
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl LoginRequest {
    /// Surrounding whitespace is not part of the address
    pub fn normalized(self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            ..self
        }
    }
}

//! User model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Marketplace role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Buyer,
    Seller,
    Admin,
    SuperAdmin,
    /// Any role string the console does not recognize
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles allowed into the admin console
    pub fn is_privileged(self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }

    /// Position in the privilege hierarchy (higher includes lower)
    pub fn rank(self) -> u8 {
        match self {
            Role::Unknown => 0,
            Role::Buyer | Role::Seller => 1,
            Role::Admin => 2,
            Role::SuperAdmin => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Buyer => "BUYER",
            Role::Seller => "SELLER",
            Role::Admin => "ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    /// Case-insensitive; unknown strings map to [`Role::Unknown`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "BUYER" => Role::Buyer,
            "SELLER" => Role::Seller,
            "ADMIN" => Role::Admin,
            "SUPER_ADMIN" => Role::SuperAdmin,
            _ => Role::Unknown,
        })
    }
}

/// Account status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pending,
    Active,
    Suspend,
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Status::Pending),
            "ACTIVE" => Ok(Status::Active),
            "SUSPEND" => Ok(Status::Suspend),
            _ => Err(()),
        }
    }
}

/// Wallet summary embedded in a user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(rename = "_id")]
    pub id: String,
    pub balance: f64,
}

/// User record as returned by the marketplace API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub active_role: Role,
    pub is_verified: bool,
    pub is_status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Moderation actions an admin can take on a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    Verify,
    Suspend,
    Activate,
    Delete,
}

impl User {
    /// Actions offered for this user given its current status
    pub fn available_actions(&self) -> Vec<UserAction> {
        let status_action = match self.is_status {
            Status::Pending => UserAction::Verify,
            Status::Active => UserAction::Suspend,
            Status::Suspend => UserAction::Activate,
        };
        vec![status_action, UserAction::Delete]
    }
}

/// Read-only snapshot of the authenticated principal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionIdentity {
    pub id: String,
    pub role: Role,
    pub is_verified: bool,
    pub is_status: Option<Status>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Lenient shape of the `/user/me` payload.
///
/// Only `_id` decides whether the session is authenticated. Every other
/// field tolerates `null`, absence and unknown values, falling back to its
/// default, so that a partial record never fails the whole decode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_role: Role,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_verified: bool,
    #[serde(default, deserialize_with = "lenient_status")]
    pub is_status: Option<Status>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<Status>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|status| status.parse().ok()))
}

impl IdentityRecord {
    /// A record without an `_id` is not an identity
    pub fn into_identity(self) -> Option<SessionIdentity> {
        let id = self.id.filter(|id| !id.is_empty())?;
        Some(SessionIdentity {
            id,
            role: self.active_role,
            is_verified: self.is_verified,
            is_status: self.is_status,
            name: self.name,
            email: self.email,
        })
    }
}

//! Item model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Moderation status of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Pending,
    Published,
    Cancel,
}

impl std::str::FromStr for ItemStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ItemStatus::Pending),
            "PUBLISHED" => Ok(ItemStatus::Published),
            "CANCEL" => Ok(ItemStatus::Cancel),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    InStock,
    Rented,
    Sold,
}

/// How the item is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    Rent,
    Sell,
    Skill,
}

/// What kind of object the item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectCategory {
    Electronics,
    Books,
    Furniture,
    Clothing,
    Sports,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    New,
    Used,
}

/// Owner reference, either a bare id or the populated user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OwnerRef {
    Id(String),
    User(Box<User>),
}

/// Listing record as returned by the marketplace API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner_id: OwnerRef,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    pub status: ItemStatus,
    pub selling_category: ItemCategory,
    pub availability: Availability,
    pub object_category: ObjectCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pictures: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Moderation actions an admin can take on a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemAction {
    Publish,
    Reject,
    Delete,
}

impl Item {
    /// Actions offered for this listing. Only pending listings are
    /// reviewed; settled ones can only be deleted.
    pub fn available_actions(&self) -> Vec<ItemAction> {
        match self.status {
            ItemStatus::Pending => vec![ItemAction::Publish, ItemAction::Reject, ItemAction::Delete],
            ItemStatus::Published | ItemStatus::Cancel => vec![ItemAction::Delete],
        }
    }

    /// Display name of the owner when the API populated it
    pub fn owner_name(&self) -> Option<&str> {
        match &self.owner_id {
            OwnerRef::User(user) => Some(user.name.as_str()),
            OwnerRef::Id(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(status: &str, owner: serde_json::Value) -> Item {
        serde_json::from_value(serde_json::json!({
            "_id": "i1",
            "ownerId": owner,
            "title": "Calculus textbook",
            "price": 350.0,
            "status": status,
            "sellingCategory": "SELL",
            "availability": "IN_STOCK",
            "objectCategory": "BOOKS"
        }))
        .unwrap()
    }

    #[test]
    fn test_owner_ref_accepts_id_or_user() {
        let bare = item("PENDING", serde_json::json!("u1"));
        assert!(bare.owner_name().is_none());

        let populated = item(
            "PENDING",
            serde_json::json!({
                "_id": "u1",
                "name": "Karim",
                "email": "karim@cse.bubt.edu.bd",
                "activeRole": "SELLER",
                "isVerified": true,
                "isStatus": "ACTIVE"
            }),
        );
        assert_eq!(populated.owner_name(), Some("Karim"));
    }

    #[test]
    fn test_available_actions_follow_status() {
        let owner = serde_json::json!("u1");
        assert_eq!(
            item("PENDING", owner.clone()).available_actions(),
            vec![ItemAction::Publish, ItemAction::Reject, ItemAction::Delete]
        );
        assert_eq!(
            item("PUBLISHED", owner.clone()).available_actions(),
            vec![ItemAction::Delete]
        );
        assert_eq!(
            item("CANCEL", owner).available_actions(),
            vec![ItemAction::Delete]
        );
    }
}

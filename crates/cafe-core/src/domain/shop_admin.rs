//! Shop admin account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::id::EntityId;
use super::raw::RawRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ShopAdmin {
    pub id: Option<EntityId>,
    pub coffee_shop_id: Option<EntityId>,
    pub username: String,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ShopAdmin {
    pub fn from_json(data: &Value) -> Self {
        let raw = RawRecord::new(data);
        Self {
            id: raw.id("id"),
            coffee_shop_id: raw.id("coffee_shop_id"),
            username: raw.text("username"),
            is_active: raw.flag("is_active", true),
            created_at: raw.timestamp("created_at"),
            updated_at: raw.timestamp("updated_at"),
        }
    }
}

impl From<Value> for ShopAdmin {
    fn from(data: Value) -> Self {
        Self::from_json(&data)
    }
}

#[derive(Clone, Serialize, Validate)]
pub struct ShopAdminInput {
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,

    #[validate(length(min = 6, max = 100, message = "Password must be between 6 and 100 characters"))]
    pub password: String,
}

impl ShopAdminInput {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }
}

impl std::fmt::Debug for ShopAdminInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopAdminInput")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_password_hash_never_read() {
        let admin = ShopAdmin::from_json(&json!({
            "id": 2,
            "coffee_shop_id": 5,
            "username": "barista",
            "password_hash": "$2a$10$..."
        }));
        let out = serde_json::to_value(&admin).unwrap();
        assert!(out.get("password_hash").is_none());
        assert_eq!(admin.username, "barista");
    }

    #[test]
    fn test_input_debug_hides_password() {
        let input = ShopAdminInput {
            username: "barista".into(),
            password: "secret123".into(),
        };
        assert!(input.validate().is_ok());
        assert!(!format!("{:?}", input).contains("secret123"));
    }
}

// ============================================================================
// Café Core - Coffee Shop Entity
// File: crates/cafe-core/src/domain/coffee_shop.rs
// Description: Coffee shop under a tenant
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::id::EntityId;
use super::raw::RawRecord;
use super::shop_admin::ShopAdmin;

/// Coffee shop entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct CoffeeShop {
    pub id: Option<EntityId>,
    pub tenant_id: Option<EntityId>,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub instagram_url: String,
    pub logo_url: String,
    pub hero_image_url: String,
    pub description: String,
    pub is_active: bool,

    /// Preloaded when a single shop is fetched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admins: Vec<ShopAdmin>,

    // Audit fields
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CoffeeShop {
    pub fn from_json(data: &Value) -> Self {
        let raw = RawRecord::new(data);
        Self {
            id: raw.id("id"),
            tenant_id: raw.id("tenant_id"),
            name: raw.text("name"),
            location: raw.text("location"),
            phone: raw.text("phone"),
            instagram_url: raw.text("instagram_url"),
            logo_url: raw.text("logo_url"),
            hero_image_url: raw.text("hero_image_url"),
            description: raw.text("description"),
            is_active: raw.flag("is_active", true),
            admins: raw.list("admins", ShopAdmin::from_json),
            created_at: raw.timestamp("created_at"),
            updated_at: raw.timestamp("updated_at"),
        }
    }
}

impl From<Value> for CoffeeShop {
    fn from(data: Value) -> Self {
        Self::from_json(&data)
    }
}

/// Coffee shops accept the same fields as shop settings.
pub type CoffeeShopInput = super::cafe_settings::SettingsInput;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shop_with_admins() {
        let shop = CoffeeShop::from_json(&json!({
            "id": 5,
            "tenant_id": 1,
            "name": "Nour Downtown",
            "admins": [{"id": 2, "username": "barista"}],
            "tenant": {"id": 1}
        }));
        assert_eq!(shop.admins.len(), 1);
        assert_eq!(shop.admins[0].username, "barista");
        assert!(shop.is_active);
        assert_eq!(shop.location, "");
    }
}

// ============================================================================
// Café Core - Tenant Entity
// File: crates/cafe-core/src/domain/tenant.rs
// Description: Platform tenant owning coffee shops
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::coffee_shop::CoffeeShop;
use super::id::EntityId;
use super::raw::RawRecord;

/// Tenant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Tenant {
    pub id: Option<EntityId>,
    pub subdomain: String,
    pub name: String,
    pub is_active: bool,

    /// Preloaded when a single tenant is fetched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coffee_shops: Vec<CoffeeShop>,

    // Audit fields
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tenant {
    pub fn from_json(data: &Value) -> Self {
        let raw = RawRecord::new(data);
        Self {
            id: raw.id("id"),
            subdomain: raw.text("subdomain"),
            name: raw.text("name"),
            is_active: raw.flag("is_active", true),
            coffee_shops: raw.list("coffee_shops", CoffeeShop::from_json),
            created_at: raw.timestamp("created_at"),
            updated_at: raw.timestamp("updated_at"),
        }
    }
}

impl From<Value> for Tenant {
    fn from(data: Value) -> Self {
        Self::from_json(&data)
    }
}

/// Tenant create/update payload.
///
/// `subdomain` is only accepted on create.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct TenantInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 50, message = "Subdomain must be between 3 and 50 characters"))]
    pub subdomain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 100, message = "Tenant name must be between 2 and 100 characters"))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl TenantInput {
    pub fn create(subdomain: &str, name: &str) -> Self {
        Self {
            subdomain: Some(subdomain.trim().to_lowercase()),
            name: Some(name.trim().to_string()),
            is_active: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tenant_with_shops() {
        let tenant = Tenant::from_json(&json!({
            "id": 1,
            "subdomain": "nour",
            "name": "Nour Group",
            "coffee_shops": [{"id": 5, "tenant_id": 1, "name": "Nour Downtown"}]
        }));
        assert!(tenant.is_active);
        assert_eq!(tenant.coffee_shops.len(), 1);
        assert_eq!(tenant.coffee_shops[0].tenant_id, Some(EntityId::from(1)));
    }

    #[test]
    fn test_create_input() {
        let input = TenantInput::create(" Nour ", "Nour Group");
        assert!(input.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"subdomain": "nour", "name": "Nour Group"})
        );
    }
}

//! Menu item entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidateUrl, ValidationError};

use super::category::Category;
use super::id::EntityId;
use super::raw::RawRecord;

/// Menu item belonging to a coffee shop.
///
/// Prices are whole amounts in the smallest currency unit. `price_premium`
/// only exists while `has_dual_pricing` is on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct MenuItem {
    pub id: Option<EntityId>,
    pub name: String,
    pub category_id: Option<EntityId>,
    /// Preloaded category, when the server embeds it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub price: u64,
    pub price_premium: Option<u64>,
    pub has_dual_pricing: bool,
    pub image_url: String,
    pub order_index: i64,
    pub is_available: bool,

    // Audit
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MenuItem {
    pub fn from_json(data: &Value) -> Self {
        let raw = RawRecord::new(data);
        let has_dual_pricing = raw.flag("has_dual_pricing", false);

        Self {
            id: raw.id("id"),
            name: raw.text("name"),
            category_id: raw.id("category_id"),
            category: raw
                .object("category")
                .map(Category::from_json)
                .filter(|c| c.id.as_ref().is_some_and(|id| id.as_number() != Some(0))),
            price: raw.amount("price"),
            price_premium: raw.opt_amount("price_premium").filter(|_| has_dual_pricing),
            has_dual_pricing,
            image_url: raw.text("image_url"),
            order_index: raw.int("order_index"),
            is_available: raw.flag("is_available", true),
            created_at: raw.timestamp("created_at"),
            updated_at: raw.timestamp("updated_at"),
        }
    }

    pub fn belongs_to(&self, category_id: &EntityId) -> bool {
        self.category_id.as_ref() == Some(category_id)
    }

    /// Premium tier price, when dual pricing is active.
    pub fn premium(&self) -> Option<u64> {
        self.price_premium.filter(|_| self.has_dual_pricing)
    }
}

impl From<Value> for MenuItem {
    fn from(data: Value) -> Self {
        Self::from_json(&data)
    }
}

impl Default for MenuItem {
    fn default() -> Self {
        Self::from_json(&Value::Null)
    }
}

/// Create/update payload for a menu item
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[validate(schema(function = "validate_pricing", skip_on_field_errors = false))]
pub struct MenuItemInput {
    #[validate(length(min = 2, max = 100, message = "Item name must be between 2 and 100 characters"))]
    pub name: String,

    pub category_id: EntityId,

    pub price: u64,

    /// Always serialized; `null` clears the premium tier on the server
    pub price_premium: Option<u64>,

    pub has_dual_pricing: bool,

    /// Always serialized; `""` clears the image on the server
    #[validate(custom(function = "validate_image_url"))]
    pub image_url: String,

    #[validate(range(min = 0, message = "Order index must not be negative"))]
    pub order_index: i64,

    pub is_available: bool,
}

impl MenuItemInput {
    pub fn new(name: &str, category_id: EntityId, price: u64) -> Self {
        Self {
            name: name.trim().to_string(),
            category_id,
            price,
            price_premium: None,
            has_dual_pricing: false,
            image_url: String::new(),
            order_index: 0,
            is_available: true,
        }
    }

    /// Turn dual pricing on or off; turning it off clears the premium price.
    pub fn with_premium(mut self, premium: Option<u64>) -> Self {
        self.has_dual_pricing = premium.is_some();
        self.price_premium = premium;
        self
    }

    pub fn normalized(mut self) -> Self {
        if !self.has_dual_pricing {
            self.price_premium = None;
        }
        self.image_url = self.image_url.trim().to_string();
        self
    }
}

fn validate_image_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() || url.validate_url() {
        return Ok(());
    }
    let mut err = ValidationError::new("url");
    err.message = Some("Image URL is not a valid URL".into());
    Err(err)
}

fn validate_pricing(input: &MenuItemInput) -> Result<(), ValidationError> {
    if input.has_dual_pricing && input.price_premium.is_none() {
        let mut err = ValidationError::new("premium_required");
        err.message = Some("Premium price is required when dual pricing is enabled".into());
        return Err(err);
    }
    Ok(())
}

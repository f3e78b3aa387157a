//! Café (shop) settings entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::id::EntityId;
use super::raw::RawRecord;

/// Public-facing settings of the active shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct CafeSettings {
    pub id: Option<EntityId>,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub instagram_url: String,
    pub logo_url: String,
    pub hero_image_url: String,
    pub description: String,
    pub is_active: bool,

    // Audit
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CafeSettings {
    pub fn from_json(data: &Value) -> Self {
        let raw = RawRecord::new(data);
        Self {
            id: raw.id("id"),
            name: raw.text("name"),
            location: raw.text("location"),
            phone: raw.text("phone"),
            instagram_url: raw.text("instagram_url"),
            logo_url: raw.text("logo_url"),
            hero_image_url: raw.text("hero_image_url"),
            description: raw.text("description"),
            is_active: raw.flag("is_active", true),
            created_at: raw.timestamp("created_at"),
            updated_at: raw.timestamp("updated_at"),
        }
    }
}

impl From<Value> for CafeSettings {
    fn from(data: Value) -> Self {
        Self::from_json(&data)
    }
}

impl Default for CafeSettings {
    fn default() -> Self {
        Self::from_json(&Value::Null)
    }
}

/// Partial update payload for shop settings and coffee shops.
///
/// Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct SettingsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 100, message = "Shop name must be between 2 and 100 characters"))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200, message = "Location too long"))]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20, message = "Phone number too long"))]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Instagram URL is not a valid URL"))]
    pub instagram_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Logo URL is not a valid URL"))]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Hero image URL is not a valid URL"))]
    pub hero_image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Description too long"))]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl SettingsInput {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

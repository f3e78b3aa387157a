//! Category entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::id::EntityId;
use super::raw::RawRecord;

/// Menu category, managed by the main admin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Category {
    pub id: Option<EntityId>,
    /// Internal key, unique per tenant
    pub name: String,
    pub display_name: String,
    pub emoji: String,
    pub color: String,
    pub order_index: i64,
    pub is_active: bool,

    // Audit
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn from_json(data: &Value) -> Self {
        let raw = RawRecord::new(data);
        Self {
            id: raw.id("id"),
            name: raw.text("name"),
            display_name: raw.text("display_name"),
            emoji: raw.text("emoji"),
            color: raw.text("color"),
            order_index: raw.int("order_index"),
            is_active: raw.flag("is_active", true),
            created_at: raw.timestamp("created_at"),
            updated_at: raw.timestamp("updated_at"),
        }
    }

    /// Human label, falling back to the internal key.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

impl From<Value> for Category {
    fn from(data: Value) -> Self {
        Self::from_json(&data)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::from_json(&Value::Null)
    }
}

/// Create/update payload for a category
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct CategoryInput {
    #[validate(length(min = 2, max = 50, message = "Category name must be between 2 and 50 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 100, message = "Display name must be between 2 and 100 characters"))]
    pub display_name: String,

    #[validate(length(max = 10, message = "Emoji too long"))]
    pub emoji: String,

    #[validate(length(max = 50, message = "Color too long"))]
    pub color: String,

    #[validate(range(min = 0, message = "Order index must not be negative"))]
    pub order_index: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CategoryInput {
    pub fn new(name: &str, display_name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            display_name: display_name.trim().to_string(),
            ..Default::default()
        }
    }
}

impl From<&Category> for CategoryInput {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            display_name: category.display_name.clone(),
            emoji: category.emoji.clone(),
            color: category.color.clone(),
            order_index: category.order_index,
            is_active: Some(category.is_active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_from_empty_payload() {
        let category = Category::from_json(&json!({}));
        assert_eq!(category.id, None);
        assert_eq!(category.name, "");
        assert_eq!(category.display_name, "");
        assert_eq!(category.order_index, 0);
        assert!(category.is_active);
        assert!(category.created_at.is_none());
    }

    #[test]
    fn test_deserialize_never_fails() {
        let category: Category = serde_json::from_value(json!({
            "id": 4,
            "name": "hot_drinks",
            "display_name": "نوشیدنی گرم",
            "emoji": "☕",
            "order_index": "2",
            "is_active": false
        }))
        .unwrap();

        assert_eq!(category.id, Some(EntityId::from(4)));
        assert_eq!(category.label(), "نوشیدنی گرم");
        assert_eq!(category.order_index, 2);
        assert!(!category.is_active);
    }

    #[test]
    fn test_input_validation() {
        assert!(CategoryInput::new("hot", "Hot drinks").validate().is_ok());
        assert!(CategoryInput::new("h", "Hot drinks").validate().is_err());
    }
}

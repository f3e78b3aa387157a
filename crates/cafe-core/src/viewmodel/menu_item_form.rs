//! Menu item form
//!
//! Raw text fields as typed by the admin, parsed into a validated payload
//! before anything is sent.

use validator::Validate;

use crate::domain::{EntityId, MenuItem, MenuItemInput};
use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemForm {
    pub name: String,
    pub category_id: String,
    pub price: String,
    pub price_premium: String,
    pub has_dual_pricing: bool,
    pub image_url: String,
    pub order_index: String,
    pub is_available: bool,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category_id: String::new(),
            price: String::new(),
            price_premium: String::new(),
            has_dual_pricing: false,
            image_url: String::new(),
            order_index: "0".to_string(),
            is_available: true,
        }
    }
}

impl MenuItemForm {
    /// Pre-fill for editing an existing item.
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            category_id: item
                .category_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            price: item.price.to_string(),
            price_premium: item.premium().map(|p| p.to_string()).unwrap_or_default(),
            has_dual_pricing: item.has_dual_pricing,
            image_url: item.image_url.clone(),
            order_index: item.order_index.to_string(),
            is_available: item.is_available,
        }
    }

    pub fn parse(&self) -> Result<MenuItemInput, ClientError> {
        let category_id = self.category_id.trim();
        if category_id.is_empty() {
            return Err(ClientError::Validation("Category is required".into()));
        }

        let price = parse_amount("Price", &self.price)?;
        let price_premium = if self.has_dual_pricing {
            Some(parse_amount("Premium price", &self.price_premium)?)
        } else {
            None
        };

        let order_index = match normalize_digits(&self.order_index).as_str() {
            "" => 0,
            raw => raw.parse::<i64>().map_err(|_| {
                ClientError::Validation(format!("Order index must be a whole number, got '{}'", self.order_index.trim()))
            })?,
        };

        let input = MenuItemInput {
            name: self.name.trim().to_string(),
            category_id: EntityId::new(category_id),
            price,
            price_premium,
            has_dual_pricing: self.has_dual_pricing,
            image_url: self.image_url.trim().to_string(),
            order_index,
            is_available: self.is_available,
        }
        .normalized();

        input.validate()?;
        Ok(input)
    }
}

fn parse_amount(label: &str, raw: &str) -> Result<u64, ClientError> {
    let digits = normalize_digits(raw);
    if digits.is_empty() {
        return Err(ClientError::Validation(format!("{} is required", label)));
    }
    digits.parse::<u64>().map_err(|_| {
        ClientError::Validation(format!("{} must be a non-negative whole number, got '{}'", label, raw.trim()))
    })
}

/// Latin digits with grouping separators removed; Persian and Arabic-Indic
/// digits are accepted.
fn normalize_digits(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '٬' | '_' | ' '))
        .map(|c| match c {
            '۰'..='۹' => char::from(b'0' + (c as u32 - '۰' as u32) as u8),
            '٠'..='٩' => char::from(b'0' + (c as u32 - '٠' as u32) as u8),
            other => other,
        })
        .collect()
}

//! # Café Core - Domain Module
//! 
//! Entities built from raw API payloads, plus their request payloads.

pub mod id;
pub mod raw;
pub mod category;
pub mod menu_item;
pub mod cafe_settings;
pub mod tenant;
pub mod coffee_shop;
pub mod shop_admin;
pub mod session;

// Re-export all entities and enums
pub use id::EntityId;
pub use category::{Category, CategoryInput};
pub use menu_item::{MenuItem, MenuItemInput};
pub use cafe_settings::{CafeSettings, SettingsInput};
pub use tenant::{Tenant, TenantInput};
pub use coffee_shop::{CoffeeShop, CoffeeShopInput};
pub use shop_admin::{ShopAdmin, ShopAdminInput};
pub use session::{AdminRole, Credentials, LoginResponse, Session};

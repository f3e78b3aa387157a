//! Repository traits (ports)

pub mod menu_item_repository;
pub mod category_repository;
pub mod settings_repository;
pub mod tenant_repository;
pub mod coffee_shop_repository;
pub mod auth_gateway;
pub mod session_store;

pub use menu_item_repository::MenuItemRepository;
pub use category_repository::CategoryRepository;
pub use settings_repository::SettingsRepository;
pub use tenant_repository::TenantRepository;
pub use coffee_shop_repository::CoffeeShopRepository;
pub use auth_gateway::AuthGateway;
pub use session_store::SessionStore;

#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
#[cfg(test)]
pub use session_store::MockSessionStore;

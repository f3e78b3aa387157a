//! HTTP adapters

pub mod api_client;
pub mod auth_gateway_impl;
pub mod category_repo_impl;
pub mod coffee_shop_repo_impl;
pub mod menu_item_repo_impl;
pub mod settings_repo_impl;
pub mod tenant_repo_impl;

pub use api_client::{ApiClient, TokenHandle};
pub use auth_gateway_impl::HttpAuthGateway;
pub use category_repo_impl::HttpCategoryRepository;
pub use coffee_shop_repo_impl::HttpCoffeeShopRepository;
pub use menu_item_repo_impl::HttpMenuItemRepository;
pub use settings_repo_impl::HttpSettingsRepository;
pub use tenant_repo_impl::HttpTenantRepository;

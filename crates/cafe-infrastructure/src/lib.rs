//! # Café Infrastructure
//! 
//! HTTP repository implementations and session storage (adapters).

pub mod http;
pub mod session;

pub use http::{
    ApiClient, HttpAuthGateway, HttpCategoryRepository, HttpCoffeeShopRepository,
    HttpMenuItemRepository, HttpSettingsRepository, HttpTenantRepository,
};
pub use session::FileSessionStore;

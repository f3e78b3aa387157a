//! Dependency wiring

use std::sync::Arc;

use cafe_core::services::{AuthService, DashboardService, MenuPageService};
use cafe_core::views::PriceFormatter;
use cafe_infrastructure::{
    ApiClient, FileSessionStore, HttpAuthGateway, HttpCategoryRepository, HttpCoffeeShopRepository,
    HttpMenuItemRepository, HttpSettingsRepository, HttpTenantRepository,
};
use cafe_shared::config::AppConfig;

pub type MenuService = MenuPageService<HttpCategoryRepository, HttpMenuItemRepository, HttpSettingsRepository>;
pub type Dashboard = DashboardService<HttpMenuItemRepository, HttpCategoryRepository, HttpSettingsRepository>;

pub struct App {
    pub config: AppConfig,
    pub auth: AuthService<HttpAuthGateway, FileSessionStore>,
    pub items: Arc<HttpMenuItemRepository>,
    pub categories: Arc<HttpCategoryRepository>,
    pub settings: Arc<HttpSettingsRepository>,
    pub tenants: HttpTenantRepository,
    pub shops: HttpCoffeeShopRepository,
    pub pricing: PriceFormatter,
    pub json: bool,
}

impl App {
    pub fn build(config: AppConfig, json: bool) -> anyhow::Result<Self> {
        let client = Arc::new(ApiClient::new(&config.api)?);
        let store = Arc::new(FileSessionStore::new(config.session.path.clone()));

        Ok(Self {
            auth: AuthService::new(Arc::new(HttpAuthGateway::new(client.clone())), store),
            items: Arc::new(HttpMenuItemRepository::new(client.clone())),
            categories: Arc::new(HttpCategoryRepository::new(client.clone())),
            settings: Arc::new(HttpSettingsRepository::new(client.clone())),
            tenants: HttpTenantRepository::new(client.clone()),
            shops: HttpCoffeeShopRepository::new(client),
            pricing: PriceFormatter::new(config.display.clone()),
            json,
            config,
        })
    }

    pub fn menu_service(&self) -> MenuService {
        MenuPageService::new(self.categories.clone(), self.items.clone(), self.settings.clone())
    }

    pub fn dashboard(&self) -> Dashboard {
        DashboardService::new(self.items.clone(), self.categories.clone(), self.settings.clone())
    }
}

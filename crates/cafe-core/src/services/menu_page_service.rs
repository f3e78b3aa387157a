// ============================================================================
// Café Core - Public Menu Page Service
// File: crates/cafe-core/src/services/menu_page_service.rs
// ============================================================================
//! Loads everything the public menu page shows in one go

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::{CafeSettings, Category, MenuItem};
use crate::error::ClientError;
use crate::repositories::{CategoryRepository, MenuItemRepository, SettingsRepository};
use crate::views::{category_tabs, group_by_category, CategoryFilter, CategoryGroup, CategoryTab};

/// Data behind the public menu page
#[derive(Debug, Clone, PartialEq)]
pub struct PublicMenu {
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
    pub settings: CafeSettings,
}

impl PublicMenu {
    pub fn grouped(&self, filter: &CategoryFilter) -> Vec<CategoryGroup> {
        group_by_category(&self.categories, &self.items, filter)
    }

    pub fn tabs(&self, all_label: &str) -> Vec<CategoryTab> {
        category_tabs(&self.categories, &self.items, all_label)
    }
}

pub struct MenuPageService<C, M, S>
where
    C: CategoryRepository,
    M: MenuItemRepository,
    S: SettingsRepository,
{
    categories: Arc<C>,
    items: Arc<M>,
    settings: Arc<S>,
}

impl<C, M, S> MenuPageService<C, M, S>
where
    C: CategoryRepository,
    M: MenuItemRepository,
    S: SettingsRepository,
{
    pub fn new(categories: Arc<C>, items: Arc<M>, settings: Arc<S>) -> Self {
        Self {
            categories,
            items,
            settings,
        }
    }

    /// Categories, items, and shop settings are fetched concurrently. The
    /// first failure fails the whole load; no partial page is produced.
    pub async fn load(&self) -> Result<PublicMenu, ClientError> {
        let (categories, items, settings) = tokio::try_join!(
            self.categories.list_public(),
            self.items.list_public(),
            self.settings.get_public(),
        )
        .map_err(|e| {
            error!("Failed to load public menu: {}", e);
            e
        })?;

        info!(
            "Loaded public menu: {} categories, {} items",
            categories.len(),
            items.len()
        );

        Ok(PublicMenu {
            categories,
            items,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockCategoryRepository, MockMenuItemRepository, MockSettingsRepository};
    use serde_json::json;

    fn repos() -> (MockCategoryRepository, MockMenuItemRepository, MockSettingsRepository) {
        (
            MockCategoryRepository::new(),
            MockMenuItemRepository::new(),
            MockSettingsRepository::new(),
        )
    }

    #[tokio::test]
    async fn test_load_combines_all_three() {
        let (mut categories, mut items, mut settings) = repos();
        categories.expect_list_public().returning(|| {
            Ok(vec![
                Category::from_json(&json!({"id": 1, "name": "hot"})),
                Category::from_json(&json!({"id": 2, "name": "cold"})),
            ])
        });
        items.expect_list_public().returning(|| {
            Ok(vec![MenuItem::from_json(&json!({"id": 5, "name": "Latte", "category_id": 1, "price": 12000}))])
        });
        settings
            .expect_get_public()
            .returning(|| Ok(CafeSettings::from_json(&json!({"name": "Nour"}))));

        let service = MenuPageService::new(Arc::new(categories), Arc::new(items), Arc::new(settings));
        let menu = service.load().await.unwrap();

        assert_eq!(menu.settings.name, "Nour");
        let groups = menu.grouped(&CategoryFilter::All);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category.name, "hot");
        assert_eq!(menu.tabs("All").len(), 2);
    }

    #[tokio::test]
    async fn test_any_failure_fails_the_load() {
        let (mut categories, mut items, mut settings) = repos();
        categories.expect_list_public().returning(|| Ok(vec![]));
        items
            .expect_list_public()
            .returning(|| Err(ClientError::api("Coffee shop not found", 404)));
        settings.expect_get_public().returning(|| Ok(CafeSettings::default()));

        let service = MenuPageService::new(Arc::new(categories), Arc::new(items), Arc::new(settings));
        let err = service.load().await.unwrap_err();
        assert_eq!(err.user_message("fallback"), "Coffee shop not found");
    }
}

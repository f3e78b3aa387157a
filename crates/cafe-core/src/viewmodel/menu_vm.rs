//! Public menu ViewModel
//!
//! Holds the load state of the public menu and the selected category tab.

use cafe_shared::constants::MSG_MENU_LOAD_FAILED;

use crate::repositories::{CategoryRepository, MenuItemRepository, SettingsRepository};
use crate::services::{MenuPageService, PublicMenu};
use crate::views::{CategoryFilter, CategoryGroup, CategoryTab};

use super::state::{LoadState, PageLoader};

#[derive(Debug, Default)]
pub struct MenuViewModel {
    loader: PageLoader<PublicMenu>,
    pub selected: CategoryFilter,
}

impl MenuViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<C, M, S>(&mut self, service: &MenuPageService<C, M, S>)
    where
        C: CategoryRepository,
        M: MenuItemRepository,
        S: SettingsRepository,
    {
        let ticket = self.loader.begin();
        let result = service.load().await;
        self.loader.finish(ticket, result, MSG_MENU_LOAD_FAILED);
    }

    pub fn state(&self) -> &LoadState<PublicMenu> {
        self.loader.state()
    }

    pub fn menu(&self) -> Option<&PublicMenu> {
        self.loader.data()
    }

    /// Selecting a category that no longer has items falls back to "All".
    pub fn select(&mut self, filter: CategoryFilter) {
        let known = match (&filter, self.menu()) {
            (CategoryFilter::All, _) => true,
            (CategoryFilter::Only(id), Some(menu)) => menu.items.iter().any(|i| i.belongs_to(id)),
            (CategoryFilter::Only(_), None) => false,
        };
        self.selected = if known { filter } else { CategoryFilter::All };
    }

    pub fn groups(&self) -> Vec<CategoryGroup> {
        self.menu()
            .map(|menu| menu.grouped(&self.selected))
            .unwrap_or_default()
    }

    pub fn tabs(&self, all_label: &str) -> Vec<CategoryTab> {
        self.menu().map(|menu| menu.tabs(all_label)).unwrap_or_default()
    }

    pub fn error(&self) -> Option<&str> {
        self.loader.error()
    }
}

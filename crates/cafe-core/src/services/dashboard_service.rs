// ============================================================================
// Café Core - Shop Admin Dashboard Service
// File: crates/cafe-core/src/services/dashboard_service.rs
// ============================================================================
//! Menu item and settings management for a signed-in shop admin

use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

use crate::domain::{CafeSettings, Category, EntityId, MenuItem, SettingsInput};
use crate::error::ClientError;
use crate::repositories::{CategoryRepository, MenuItemRepository, SettingsRepository};
use crate::viewmodel::MenuItemForm;
use crate::views::{group_by_category, CategoryFilter, CategoryGroup};

/// Everything the dashboard lists
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub items: Vec<MenuItem>,
    pub categories: Vec<Category>,
    pub settings: CafeSettings,
}

impl DashboardData {
    pub fn grouped(&self) -> Vec<CategoryGroup> {
        group_by_category(&self.categories, &self.items, &CategoryFilter::All)
    }

    /// Replace the entry with the same id, or append a new one.
    pub fn apply_saved(&mut self, saved: MenuItem) {
        let existing = saved
            .id
            .as_ref()
            .and_then(|id| self.items.iter().position(|i| i.id.as_ref() == Some(id)));

        match existing {
            Some(pos) => self.items[pos] = saved,
            None => self.items.push(saved),
        }
    }

    pub fn apply_deleted(&mut self, deleted: &MenuItem) {
        if let Some(id) = deleted.id.as_ref() {
            self.items.retain(|i| i.id.as_ref() != Some(id));
        }
    }

    pub fn category(&self, id: &EntityId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id.as_ref() == Some(id))
    }
}

pub struct DashboardService<M, C, S>
where
    M: MenuItemRepository,
    C: CategoryRepository,
    S: SettingsRepository,
{
    items: Arc<M>,
    categories: Arc<C>,
    settings: Arc<S>,
}

impl<M, C, S> DashboardService<M, C, S>
where
    M: MenuItemRepository,
    C: CategoryRepository,
    S: SettingsRepository,
{
    pub fn new(items: Arc<M>, categories: Arc<C>, settings: Arc<S>) -> Self {
        Self {
            items,
            categories,
            settings,
        }
    }

    pub async fn load(&self) -> Result<DashboardData, ClientError> {
        let (items, categories, settings) = tokio::try_join!(
            self.items.list(),
            self.categories.list(),
            self.settings.get(),
        )
        .map_err(|e| {
            error!("Failed to load dashboard: {}", e);
            e
        })?;

        Ok(DashboardData {
            items,
            categories,
            settings,
        })
    }

    /// Create when `editing` is `None`, update otherwise. The returned item
    /// is the server's record, not a merge with the local one.
    pub async fn save_item(&self, editing: Option<&MenuItem>, form: &MenuItemForm) -> Result<MenuItem, ClientError> {
        let input = form.parse()?;

        let saved = match editing {
            Some(item) => self.items.update(item, &input).await?,
            None => self.items.create(&input).await?,
        };

        info!(
            "{} menu item '{}'",
            if editing.is_some() { "Updated" } else { "Created" },
            saved.name
        );
        Ok(saved)
    }

    pub async fn delete_item(&self, item: &MenuItem) -> Result<(), ClientError> {
        self.items.delete(item).await?;
        info!("Deleted menu item '{}'", item.name);
        Ok(())
    }

    pub async fn update_settings(
        &self,
        current: &CafeSettings,
        input: &SettingsInput,
    ) -> Result<CafeSettings, ClientError> {
        if input.is_empty() {
            return Err(ClientError::Validation("Nothing to update".into()));
        }
        input.validate()?;

        let updated = self.settings.update(current, input).await?;
        info!("Updated shop settings for '{}'", updated.name);
        Ok(updated)
    }
}

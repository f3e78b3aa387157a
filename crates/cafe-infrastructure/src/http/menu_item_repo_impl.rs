// ============================================================================
// Café Infrastructure - HTTP Menu Item Repository
// File: crates/cafe-infrastructure/src/http/menu_item_repo_impl.rs
// ============================================================================

use std::sync::Arc;
use async_trait::async_trait;
use tracing::{error, info};

use cafe_core::domain::raw::{map_list, unwrap_envelope};
use cafe_core::domain::{EntityId, MenuItem, MenuItemInput};
use cafe_core::error::ClientError;
use cafe_core::repositories::MenuItemRepository;
use cafe_shared::constants::endpoints;

use super::api_client::{require_id, to_body, ApiClient};

pub struct HttpMenuItemRepository {
    client: Arc<ApiClient>,
}

impl HttpMenuItemRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MenuItemRepository for HttpMenuItemRepository {
    async fn list_public(&self) -> Result<Vec<MenuItem>, ClientError> {
        let body = self.client.get(endpoints::PUBLIC_MENU).await?;
        Ok(map_list(&unwrap_envelope(body), MenuItem::from_json))
    }

    async fn list(&self) -> Result<Vec<MenuItem>, ClientError> {
        let body = self.client.get(endpoints::ADMIN_MENU).await.map_err(|e| {
            error!("Failed to list menu items: {}", e);
            e
        })?;
        Ok(map_list(&unwrap_envelope(body), MenuItem::from_json))
    }

    async fn get(&self, id: &EntityId) -> Result<MenuItem, ClientError> {
        let body = self.client.get(&endpoints::menu_item(id.as_str())).await?;
        Ok(MenuItem::from_json(&unwrap_envelope(body)))
    }

    async fn create(&self, input: &MenuItemInput) -> Result<MenuItem, ClientError> {
        let body = self
            .client
            .post(endpoints::ADMIN_MENU, &to_body(input)?)
            .await
            .map_err(|e| {
                error!("Failed to create menu item '{}': {}", input.name, e);
                e
            })?;

        let created = MenuItem::from_json(&unwrap_envelope(body));
        info!("Menu item created: {:?}", created.id);
        Ok(created)
    }

    async fn update(&self, item: &MenuItem, input: &MenuItemInput) -> Result<MenuItem, ClientError> {
        let id = require_id(item.id.as_ref(), "Menu item")?;
        let body = self
            .client
            .put(&endpoints::menu_item(id.as_str()), &to_body(input)?)
            .await
            .map_err(|e| {
                error!("Failed to update menu item {}: {}", id, e);
                e
            })?;

        Ok(MenuItem::from_json(&unwrap_envelope(body)))
    }

    async fn delete(&self, item: &MenuItem) -> Result<bool, ClientError> {
        let id = require_id(item.id.as_ref(), "Menu item")?;
        self.client
            .delete(&endpoints::menu_item(id.as_str()))
            .await
            .map_err(|e| {
                error!("Failed to delete menu item {}: {}", id, e);
                e
            })?;
        Ok(true)
    }
}

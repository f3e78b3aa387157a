// ============================================================================
// Café Infrastructure - HTTP Coffee Shop Repository
// File: crates/cafe-infrastructure/src/http/coffee_shop_repo_impl.rs
// ============================================================================

use std::sync::Arc;
use async_trait::async_trait;
use tracing::{error, info};

use cafe_core::domain::raw::{map_list, unwrap_envelope};
use cafe_core::domain::{CoffeeShop, CoffeeShopInput, EntityId, ShopAdmin, ShopAdminInput};
use cafe_core::error::ClientError;
use cafe_core::repositories::CoffeeShopRepository;
use cafe_shared::constants::endpoints;

use super::api_client::{require_id, to_body, ApiClient};

pub struct HttpCoffeeShopRepository {
    client: Arc<ApiClient>,
}

impl HttpCoffeeShopRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CoffeeShopRepository for HttpCoffeeShopRepository {
    async fn list_for_tenant(&self, tenant_id: &EntityId) -> Result<Vec<CoffeeShop>, ClientError> {
        let body = self
            .client
            .get(&endpoints::tenant_shops(tenant_id.as_str()))
            .await
            .map_err(|e| {
                error!("Failed to list shops of tenant {}: {}", tenant_id, e);
                e
            })?;
        Ok(map_list(&unwrap_envelope(body), CoffeeShop::from_json))
    }

    async fn create_for_tenant(&self, tenant_id: &EntityId, input: &CoffeeShopInput) -> Result<CoffeeShop, ClientError> {
        let body = self
            .client
            .post(&endpoints::tenant_shops(tenant_id.as_str()), &to_body(input)?)
            .await
            .map_err(|e| {
                error!("Failed to create shop under tenant {}: {}", tenant_id, e);
                e
            })?;

        let created = CoffeeShop::from_json(&unwrap_envelope(body));
        info!("Coffee shop created: {}", created.name);
        Ok(created)
    }

    async fn get(&self, id: &EntityId) -> Result<CoffeeShop, ClientError> {
        let body = self.client.get(&endpoints::shop(id.as_str())).await?;
        Ok(CoffeeShop::from_json(&unwrap_envelope(body)))
    }

    async fn update(&self, shop: &CoffeeShop, input: &CoffeeShopInput) -> Result<CoffeeShop, ClientError> {
        let id = require_id(shop.id.as_ref(), "Coffee shop")?;
        let body = self
            .client
            .put(&endpoints::shop(id.as_str()), &to_body(input)?)
            .await
            .map_err(|e| {
                error!("Failed to update shop {}: {}", id, e);
                e
            })?;

        Ok(CoffeeShop::from_json(&unwrap_envelope(body)))
    }

    async fn delete(&self, shop: &CoffeeShop) -> Result<bool, ClientError> {
        let id = require_id(shop.id.as_ref(), "Coffee shop")?;
        self.client
            .delete(&endpoints::shop(id.as_str()))
            .await
            .map_err(|e| {
                error!("Failed to delete shop {}: {}", id, e);
                e
            })?;
        Ok(true)
    }

    async fn create_admin(&self, shop_id: &EntityId, input: &ShopAdminInput) -> Result<ShopAdmin, ClientError> {
        let body = self
            .client
            .post(&endpoints::shop_admins(shop_id.as_str()), &to_body(input)?)
            .await
            .map_err(|e| {
                error!("Failed to create admin '{}' for shop {}: {}", input.username, shop_id, e);
                e
            })?;

        let admin = ShopAdmin::from_json(&unwrap_envelope(body));
        info!("Shop admin created: {}", admin.username);
        Ok(admin)
    }
}

//! Coffee shop repository trait (port)

use async_trait::async_trait;

use crate::domain::{CoffeeShop, CoffeeShopInput, EntityId, ShopAdmin, ShopAdminInput};
use crate::error::ClientError;

#[async_trait]
pub trait CoffeeShopRepository: Send + Sync {
    async fn list_for_tenant(&self, tenant_id: &EntityId) -> Result<Vec<CoffeeShop>, ClientError>;
    async fn create_for_tenant(&self, tenant_id: &EntityId, input: &CoffeeShopInput) -> Result<CoffeeShop, ClientError>;
    async fn get(&self, id: &EntityId) -> Result<CoffeeShop, ClientError>;
    async fn update(&self, shop: &CoffeeShop, input: &CoffeeShopInput) -> Result<CoffeeShop, ClientError>;
    async fn delete(&self, shop: &CoffeeShop) -> Result<bool, ClientError>;
    async fn create_admin(&self, shop_id: &EntityId, input: &ShopAdminInput) -> Result<ShopAdmin, ClientError>;
}

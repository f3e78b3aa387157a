//! Menu item repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{EntityId, MenuItem, MenuItemInput};
use crate::error::ClientError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Available items of the resolved shop, public
    async fn list_public(&self) -> Result<Vec<MenuItem>, ClientError>;
    /// All items of the signed-in shop admin's shop
    async fn list(&self) -> Result<Vec<MenuItem>, ClientError>;
    async fn get(&self, id: &EntityId) -> Result<MenuItem, ClientError>;
    async fn create(&self, input: &MenuItemInput) -> Result<MenuItem, ClientError>;
    /// Returns the record exactly as the server answered it
    async fn update(&self, item: &MenuItem, input: &MenuItemInput) -> Result<MenuItem, ClientError>;
    async fn delete(&self, item: &MenuItem) -> Result<bool, ClientError>;
}

//! Category repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{Category, CategoryInput, EntityId};
use crate::error::ClientError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_public(&self) -> Result<Vec<Category>, ClientError>;
    async fn list(&self) -> Result<Vec<Category>, ClientError>;
    async fn get(&self, id: &EntityId) -> Result<Category, ClientError>;
    async fn create(&self, input: &CategoryInput) -> Result<Category, ClientError>;
    async fn update(&self, category: &Category, input: &CategoryInput) -> Result<Category, ClientError>;
    async fn delete(&self, category: &Category) -> Result<bool, ClientError>;
}

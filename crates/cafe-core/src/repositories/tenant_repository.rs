//! Tenant repository trait (port)

use async_trait::async_trait;

use crate::domain::{EntityId, Tenant, TenantInput};
use crate::error::ClientError;

#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Tenant>, ClientError>;
    async fn get(&self, id: &EntityId) -> Result<Tenant, ClientError>;
    async fn create(&self, input: &TenantInput) -> Result<Tenant, ClientError>;
    async fn update(&self, tenant: &Tenant, input: &TenantInput) -> Result<Tenant, ClientError>;
    async fn delete(&self, tenant: &Tenant) -> Result<bool, ClientError>;
}

// ============================================================================
// Café Infrastructure - HTTP Tenant Repository
// File: crates/cafe-infrastructure/src/http/tenant_repo_impl.rs
// ============================================================================

use std::sync::Arc;
use async_trait::async_trait;
use tracing::{error, info};

use cafe_core::domain::raw::{map_list, unwrap_envelope};
use cafe_core::domain::{EntityId, Tenant, TenantInput};
use cafe_core::error::ClientError;
use cafe_core::repositories::TenantRepository;
use cafe_shared::constants::endpoints;

use super::api_client::{require_id, to_body, ApiClient};

pub struct HttpTenantRepository {
    client: Arc<ApiClient>,
}

impl HttpTenantRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TenantRepository for HttpTenantRepository {
    async fn list(&self) -> Result<Vec<Tenant>, ClientError> {
        let body = self.client.get(endpoints::ADMIN_TENANTS).await.map_err(|e| {
            error!("Failed to list tenants: {}", e);
            e
        })?;
        Ok(map_list(&unwrap_envelope(body), Tenant::from_json))
    }

    async fn get(&self, id: &EntityId) -> Result<Tenant, ClientError> {
        let body = self.client.get(&endpoints::tenant(id.as_str())).await?;
        Ok(Tenant::from_json(&unwrap_envelope(body)))
    }

    async fn create(&self, input: &TenantInput) -> Result<Tenant, ClientError> {
        let body = self
            .client
            .post(endpoints::ADMIN_TENANTS, &to_body(input)?)
            .await
            .map_err(|e| {
                error!("Failed to create tenant {:?}: {}", input.subdomain, e);
                e
            })?;

        let created = Tenant::from_json(&unwrap_envelope(body));
        info!("Tenant created: {}", created.subdomain);
        Ok(created)
    }

    async fn update(&self, tenant: &Tenant, input: &TenantInput) -> Result<Tenant, ClientError> {
        let id = require_id(tenant.id.as_ref(), "Tenant")?;
        let body = self
            .client
            .put(&endpoints::tenant(id.as_str()), &to_body(input)?)
            .await
            .map_err(|e| {
                error!("Failed to update tenant {}: {}", id, e);
                e
            })?;

        Ok(Tenant::from_json(&unwrap_envelope(body)))
    }

    async fn delete(&self, tenant: &Tenant) -> Result<bool, ClientError> {
        let id = require_id(tenant.id.as_ref(), "Tenant")?;
        self.client
            .delete(&endpoints::tenant(id.as_str()))
            .await
            .map_err(|e| {
                error!("Failed to delete tenant {}: {}", id, e);
                e
            })?;
        info!("Tenant deleted: {}", id);
        Ok(true)
    }
}

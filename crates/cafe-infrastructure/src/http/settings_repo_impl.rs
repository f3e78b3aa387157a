// ============================================================================
// Café Infrastructure - HTTP Shop Settings Repository
// File: crates/cafe-infrastructure/src/http/settings_repo_impl.rs
// ============================================================================

use std::sync::Arc;
use async_trait::async_trait;
use tracing::error;

use cafe_core::domain::raw::unwrap_envelope;
use cafe_core::domain::{CafeSettings, SettingsInput};
use cafe_core::error::ClientError;
use cafe_core::repositories::SettingsRepository;
use cafe_shared::constants::endpoints;

use super::api_client::{to_body, ApiClient};

pub struct HttpSettingsRepository {
    client: Arc<ApiClient>,
}

impl HttpSettingsRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettingsRepository for HttpSettingsRepository {
    async fn get_public(&self) -> Result<CafeSettings, ClientError> {
        let body = self.client.get(endpoints::PUBLIC_SHOP).await?;
        Ok(CafeSettings::from_json(&unwrap_envelope(body)))
    }

    async fn get(&self) -> Result<CafeSettings, ClientError> {
        let body = self.client.get(endpoints::ADMIN_SETTINGS).await?;
        Ok(CafeSettings::from_json(&unwrap_envelope(body)))
    }

    /// The settings endpoint is scoped by the token, so `settings` only
    /// names what is being replaced in logs.
    async fn update(&self, settings: &CafeSettings, input: &SettingsInput) -> Result<CafeSettings, ClientError> {
        let body = self
            .client
            .put(endpoints::ADMIN_SETTINGS, &to_body(input)?)
            .await
            .map_err(|e| {
                error!("Failed to update settings of '{}': {}", settings.name, e);
                e
            })?;

        Ok(CafeSettings::from_json(&unwrap_envelope(body)))
    }
}

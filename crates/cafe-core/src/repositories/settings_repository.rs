//! Shop settings repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{CafeSettings, SettingsInput};
use crate::error::ClientError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get_public(&self) -> Result<CafeSettings, ClientError>;
    async fn get(&self) -> Result<CafeSettings, ClientError>;
    async fn update(&self, settings: &CafeSettings, input: &SettingsInput) -> Result<CafeSettings, ClientError>;
}

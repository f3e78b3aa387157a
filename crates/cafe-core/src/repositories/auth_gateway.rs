//! Authentication gateway trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{AdminRole, Credentials, LoginResponse};
use crate::error::ClientError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, role: AdminRole, credentials: &Credentials) -> Result<LoginResponse, ClientError>;

    /// Bearer token attached to every later request; `None` removes it.
    fn set_token(&self, token: Option<String>);
}

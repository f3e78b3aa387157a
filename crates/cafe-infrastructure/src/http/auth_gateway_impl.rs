// ============================================================================
// Café Infrastructure - HTTP Auth Gateway
// File: crates/cafe-infrastructure/src/http/auth_gateway_impl.rs
// ============================================================================

use std::sync::Arc;
use async_trait::async_trait;

use cafe_core::domain::{AdminRole, Credentials, LoginResponse};
use cafe_core::error::ClientError;
use cafe_core::repositories::AuthGateway;
use cafe_shared::constants::endpoints;

use super::api_client::{to_body, ApiClient};

pub struct HttpAuthGateway {
    client: Arc<ApiClient>,
}

impl HttpAuthGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, role: AdminRole, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let path = match role {
            AdminRole::Main => endpoints::MAIN_ADMIN_LOGIN,
            AdminRole::Shop => endpoints::SHOP_ADMIN_LOGIN,
        };
        let body = self.client.post(path, &to_body(credentials)?).await?;
        Ok(LoginResponse::from_json(&body))
    }

    fn set_token(&self, token: Option<String>) {
        self.client.set_token(token);
    }
}

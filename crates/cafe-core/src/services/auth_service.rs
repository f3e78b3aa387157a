// ============================================================================
// Café Core - Authentication Service
// File: crates/cafe-core/src/services/auth_service.rs
// ============================================================================
//! Admin login, logout, and session restore

use std::sync::Arc;
use parking_lot::RwLock;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{AdminRole, Credentials, Session};
use crate::error::ClientError;
use crate::repositories::{AuthGateway, SessionStore};

/// Owns the token lifecycle.
///
/// A successful login installs the token on the gateway before the session
/// is persisted; logout removes both.
pub struct AuthService<G: AuthGateway, S: SessionStore> {
    gateway: Arc<G>,
    store: Arc<S>,
    session: RwLock<Option<Session>>,
}

impl<G: AuthGateway, S: SessionStore> AuthService<G, S> {
    pub fn new(gateway: Arc<G>, store: Arc<S>) -> Self {
        Self {
            gateway,
            store,
            session: RwLock::new(None),
        }
    }

    pub async fn login(&self, role: AdminRole, credentials: &Credentials) -> Result<Session, ClientError> {
        credentials.validate()?;
        info!("Login attempt as {} admin: {}", role, credentials.username);

        let response = self.gateway.login(role, credentials).await.map_err(|e| {
            warn!("Login failed for {}: {}", credentials.username, e);
            e
        })?;

        if response.token.is_empty() {
            warn!("Login response for {} carried no token", credentials.username);
            return Err(ClientError::InvalidResponse("Login response has no token".into()));
        }

        let session = Session::new(role, response);
        self.gateway.set_token(Some(session.auth_token.clone()));
        self.store.save(&session)?;
        *self.session.write() = Some(session.clone());

        info!("Login successful for {}", credentials.username);
        Ok(session)
    }

    /// Clears the token and the stored session. Always ends signed out, even
    /// if the store fails to clear.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.gateway.set_token(None);
        *self.session.write() = None;
        self.store.clear().map_err(|e| {
            warn!("Failed to clear stored session: {}", e);
            e
        })
    }

    /// Reinstall a previously stored session, if any.
    pub fn restore(&self) -> Result<Option<Session>, ClientError> {
        let stored = self.store.load()?;
        match &stored {
            Some(session) => {
                self.gateway.set_token(Some(session.auth_token.clone()));
                info!("Restored {} admin session", session.user_type);
            }
            None => self.gateway.set_token(None),
        }
        *self.session.write() = stored.clone();
        Ok(stored)
    }

    pub fn current(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    /// Session of the given role, or a validation error naming the role.
    pub fn require(&self, role: AdminRole) -> Result<Session, ClientError> {
        match self.current() {
            Some(session) if session.user_type == role => Ok(session),
            Some(session) => Err(ClientError::Validation(format!(
                "Signed in as {} admin, this needs a {} admin",
                session.user_type, role
            ))),
            None => Err(ClientError::Validation(format!("Sign in as {} admin first", role))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LoginResponse;
    use crate::repositories::{MockAuthGateway, MockSessionStore};
    use mockall::predicate::*;
    use serde_json::json;

    fn login_ok(token: &str) -> LoginResponse {
        LoginResponse::from_json(&json!({"token": token, "user": {"id": 1, "username": "barista"}}))
    }

    #[tokio::test]
    async fn test_login_installs_token_and_saves() {
        let mut gateway = MockAuthGateway::new();
        gateway
            .expect_login()
            .withf(|role, creds| *role == AdminRole::Shop && creds.username == "barista")
            .times(1)
            .returning(|_, _| Ok(login_ok("tok-123")));
        gateway
            .expect_set_token()
            .with(eq(Some("tok-123".to_string())))
            .times(1)
            .return_const(());

        let mut store = MockSessionStore::new();
        store
            .expect_save()
            .withf(|s| s.auth_token == "tok-123" && s.user_type == AdminRole::Shop)
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(gateway), Arc::new(store));
        let session = service
            .login(AdminRole::Shop, &Credentials::new(" barista ", "secret"))
            .await
            .unwrap();

        assert_eq!(session.username(), Some("barista"));
        assert!(service.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_failure_leaves_signed_out() {
        let mut gateway = MockAuthGateway::new();
        gateway
            .expect_login()
            .returning(|_, _| Err(ClientError::api("Invalid credentials", 401)));
        gateway.expect_set_token().never();

        let mut store = MockSessionStore::new();
        store.expect_save().never();

        let service = AuthService::new(Arc::new(gateway), Arc::new(store));
        let err = service
            .login(AdminRole::Main, &Credentials::new("admin", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(service.current().is_none());
    }

    #[tokio::test]
    async fn test_login_without_token_rejected() {
        let mut gateway = MockAuthGateway::new();
        gateway.expect_login().returning(|_, _| Ok(login_ok("")));
        gateway.expect_set_token().never();

        let service = AuthService::new(Arc::new(gateway), Arc::new(MockSessionStore::new()));
        let err = service
            .login(AdminRole::Main, &Credentials::new("admin", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_empty_credentials_never_reach_gateway() {
        let mut gateway = MockAuthGateway::new();
        gateway.expect_login().never();

        let service = AuthService::new(Arc::new(gateway), Arc::new(MockSessionStore::new()));
        let err = service
            .login(AdminRole::Main, &Credentials::new("  ", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn test_restore_and_logout() {
        let mut gateway = MockAuthGateway::new();
        gateway
            .expect_set_token()
            .with(eq(Some("stored".to_string())))
            .times(1)
            .return_const(());
        gateway.expect_set_token().with(eq(None)).times(1).return_const(());

        let mut store = MockSessionStore::new();
        store.expect_load().times(1).returning(|| {
            Ok(Some(Session::new(AdminRole::Main, login_ok("stored"))))
        });
        store.expect_clear().times(1).returning(|| Ok(()));

        let service = AuthService::new(Arc::new(gateway), Arc::new(store));
        let restored = service.restore().unwrap();
        assert_eq!(restored.map(|s| s.user_type), Some(AdminRole::Main));
        assert!(service.require(AdminRole::Main).is_ok());
        assert!(service.require(AdminRole::Shop).is_err());

        service.logout().unwrap();
        assert!(!service.is_authenticated());
    }
}

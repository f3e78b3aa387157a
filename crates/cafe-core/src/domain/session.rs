//! Admin session

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use super::raw::RawRecord;

/// Which admin surface the session belongs to.
///
/// Access scoping is enforced by the server; the client only uses the role
/// to pick the login endpoint and the dashboard capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Main,
    Shop,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Main => "main",
            AdminRole::Shop => "shop",
        }
    }

    /// Tenants, shops, and categories are main-admin only.
    pub fn can_manage_platform(&self) -> bool {
        matches!(self, AdminRole::Main)
    }

    /// Menu items and shop settings are scoped to a shop admin.
    pub fn can_manage_menu(&self) -> bool {
        matches!(self, AdminRole::Shop)
    }
}

impl FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(AdminRole::Main),
            "shop" => Ok(AdminRole::Shop),
            other => Err(format!("Unknown admin role '{}'", other)),
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Serialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body of a successful login
#[derive(Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: Value,
}

impl LoginResponse {
    pub fn from_json(data: &Value) -> Self {
        let raw = RawRecord::new(data);
        Self {
            token: raw.text("token"),
            user: raw.get("user").cloned().unwrap_or(Value::Null),
        }
    }
}

/// Persisted authentication state
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub auth_token: String,
    pub user_type: AdminRole,
    pub user_info: Value,
}

impl Session {
    pub fn new(role: AdminRole, login: LoginResponse) -> Self {
        Self {
            auth_token: login.token,
            user_type: role,
            user_info: login.user,
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.user_info.get("username").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(AdminRole::Shop.as_str().parse::<AdminRole>(), Ok(AdminRole::Shop));
        assert!("owner".parse::<AdminRole>().is_err());
        assert!(AdminRole::Main.can_manage_platform());
        assert!(!AdminRole::Main.can_manage_menu());
    }

    #[test]
    fn test_session_from_login() {
        let login = LoginResponse::from_json(&json!({
            "token": "abc.def",
            "user": {"id": 1, "username": "admin"}
        }));
        let session = Session::new(AdminRole::Main, login);
        assert_eq!(session.auth_token, "abc.def");
        assert_eq!(session.username(), Some("admin"));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new(" admin ", "hunter2");
        assert_eq!(creds.username, "admin");
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }
}

//! Client errors

use std::fmt;
use thiserror::Error;

/// Normalized non-success response from the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Message used when the error body carries no `error` field.
    pub fn generic(status: u16) -> Self {
        Self::new(format!("HTTP error! status: {}", status), status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Api(ApiError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ClientError {
    pub fn api(message: impl Into<String>, status: u16) -> Self {
        ClientError::Api(ApiError::new(message, status))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// Text shown to the end user.
    ///
    /// Server and validation messages are shown as-is; transport, decoding,
    /// and storage failures fall back to the caller's localized message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api(e) if !e.message.is_empty() => e.message.clone(),
            ClientError::Validation(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        ClientError::Api(err)
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        ClientError::Validation(messages.join("; "))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_message() {
        let err = ApiError::generic(502);
        assert_eq!(err.message, "HTTP error! status: 502");
        assert_eq!(err.status, 502);
    }

    #[test]
    fn test_user_message_fallback() {
        let api = ClientError::api("Menu item not found", 404);
        assert_eq!(api.user_message("fallback"), "Menu item not found");

        let network = ClientError::Network("connection refused".into());
        assert_eq!(network.user_message("fallback"), "fallback");
        assert_eq!(network.status(), None);
    }
}

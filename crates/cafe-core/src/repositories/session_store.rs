//! Durable session storage trait (port)

#[cfg(test)]
use mockall::automock;

use crate::domain::Session;
use crate::error::ClientError;

#[cfg_attr(test, automock)]
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, ClientError>;
    fn save(&self, session: &Session) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

//! # Café Core
//! 
//! Domain entities, derived views, repository traits, and page services for
//! the café menu client.

pub mod domain;
pub mod views;
pub mod services;
pub mod viewmodel;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{ApiError, ClientError};

//! # Café Shared
//! 
//! Configuration, telemetry, and constants shared by the café menu crates.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;

//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_CURRENCY_LABEL, DEFAULT_GROUPING_SEPARATOR,
    DEFAULT_RANGE_SEPARATOR, DEFAULT_SESSION_PATH, DEFAULT_TIMEOUT_SECONDS,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiSettings,
    pub session: SessionSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplaySettings {
    pub currency_label: String,
    #[serde(default)]
    pub digits: DigitStyle,
    pub grouping_separator: String,
    pub range_separator: String,
}

/// Numeral system used when rendering prices
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigitStyle {
    #[default]
    Persian,
    Latin,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
            digits: DigitStyle::Persian,
            grouping_separator: DEFAULT_GROUPING_SEPARATOR.to_string(),
            range_separator: DEFAULT_RANGE_SEPARATOR.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            // Example: CAFE_API__BASE_URL=https://menu.example.com
            .add_source(
                Environment::with_prefix("CAFE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        tracing::debug!(env = %env, "Configuration sources loaded");
        config.try_deserialize()
    }

    /// Load from a single explicit file on top of the defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name(path))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let display = DisplaySettings::default();
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "cafe-menu")?
            .set_default("api.base_url", DEFAULT_API_BASE_URL)?
            .set_default("api.timeout_seconds", DEFAULT_TIMEOUT_SECONDS as i64)?
            .set_default("session.path", DEFAULT_SESSION_PATH)?
            .set_default("display.currency_label", display.currency_label)?
            .set_default("display.digits", "persian")?
            .set_default("display.grouping_separator", display.grouping_separator)?
            .set_default("display.range_separator", display.range_separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://menu.example.com\"\n\n[display]\ndigits = \"latin\""
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = AppConfig::from_file(&path).unwrap();

        assert_eq!(config.api.base_url, "https://menu.example.com");
        assert_eq!(config.api.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.display.digits, DigitStyle::Latin);
        assert_eq!(config.display.currency_label, DEFAULT_CURRENCY_LABEL);
        assert_eq!(config.session.path, PathBuf::from(DEFAULT_SESSION_PATH));
    }
}

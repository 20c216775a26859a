//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is loaded
//! with the `BAYNEXT` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use baynext_console::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Backend at {}", config.api.base_url);
//! ```

mod api;
mod auth;
mod error;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Backend API configuration (base URL)
    #[serde(default)]
    pub api: ApiConfig,

    /// Authentication configuration (signing secret)
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BAYNEXT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `BAYNEXT__API__BASE_URL=https://api.example.com` -> `api.base_url`
    /// - `BAYNEXT__AUTH__SECRET=...` -> `auth.secret`
    /// - `BAYNEXT__ENVIRONMENT=production` -> `environment`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BAYNEXT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.auth.validate(&self.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("BAYNEXT__API__BASE_URL");
        env::remove_var("BAYNEXT__AUTH__SECRET");
        env::remove_var("BAYNEXT__ENVIRONMENT");
    }

    #[test]
    fn test_load_with_no_env_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().expect("defaults should load");
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.auth.secret.is_none());
        assert_eq!(config.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BAYNEXT__API__BASE_URL", "https://api.baynext.dev");
        env::set_var("BAYNEXT__AUTH__SECRET", "s3cr3t");
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert_eq!(config.api.base_url, "https://api.baynext.dev");
        assert!(config.auth.secret.is_some());
    }

    #[test]
    fn test_validate_production_without_secret_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BAYNEXT__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert!(config.is_production());
        assert!(config.validate().is_err());
    }
}

//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `FUNNELCRAFT` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use funnelcraft::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod analytics;
mod email;
mod error;
mod features;
mod product;
mod server;
mod telemetry;

pub use analytics::AnalyticsConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use product::ProductConfig;
pub use server::{Environment, ServerConfig};
pub use telemetry::init_tracing;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Funnelcraft application.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Analytics configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Email configuration
    #[serde(default)]
    pub email: EmailConfig,

    /// Showcased product configuration
    #[serde(default)]
    pub product: ProductConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FUNNELCRAFT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FUNNELCRAFT__SERVER__LOG_LEVEL=debug` -> `server.log_level = "debug"`
    /// - `FUNNELCRAFT__PRODUCT__NAME=Launchpad` -> `product.name = "Launchpad"`
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
                    .prefix("FUNNELCRAFT")
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
        self.analytics.validate()?;
        self.email.validate()?;
        self.product.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
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
        env::remove_var("FUNNELCRAFT__SERVER__LOG_LEVEL");
        env::remove_var("FUNNELCRAFT__SERVER__ENVIRONMENT");
        env::remove_var("FUNNELCRAFT__PRODUCT__NAME");
        env::remove_var("FUNNELCRAFT__EMAIL__ENABLED");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().expect("load with defaults");
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.product.name, "Launchpad");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FUNNELCRAFT__SERVER__LOG_LEVEL", "debug");
        env::set_var("FUNNELCRAFT__PRODUCT__NAME", "Testpad");

        let config = AppConfig::load().expect("load with overrides");
        clear_env();

        assert_eq!(config.server.log_level, "debug");
        assert_eq!(config.product.name, "Testpad");
    }

    #[test]
    fn test_validate_full_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.is_production());
    }
}

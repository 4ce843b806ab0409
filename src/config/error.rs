//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("Invalid notifications email address")]
    InvalidNotificationsEmail,

    #[error("Recent activity window must be positive")]
    InvalidActivityWindow,

    #[error("Product version must follow semantic versioning (x.y.z)")]
    InvalidProductVersion,
}

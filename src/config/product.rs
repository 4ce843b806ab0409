//! Showcased product configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration of the product showcased on the landing page
#[derive(Debug, Clone, Deserialize)]
pub struct ProductConfig {
    /// Stable product identifier
    #[serde(default = "default_id")]
    pub id: String,

    /// Display name
    #[serde(default = "default_name")]
    pub name: String,

    /// Marketing description
    #[serde(default = "default_description")]
    pub description: String,

    /// Semantic version shown on the page
    #[serde(default = "default_version")]
    pub version: String,
}

impl ProductConfig {
    /// Validate product configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PRODUCT__ID"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PRODUCT__NAME"));
        }
        let is_semver = {
            let parts: Vec<&str> = self.version.split('.').collect();
            parts.len() == 3 && parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
        };
        if !is_semver {
            return Err(ValidationError::InvalidProductVersion);
        }
        Ok(())
    }
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            id: default_id(),
            name: default_name(),
            description: default_description(),
            version: default_version(),
        }
    }
}

fn default_id() -> String {
    "launchpad".to_string()
}

fn default_name() -> String {
    "Launchpad".to_string()
}

fn default_description() -> String {
    "Production-ready starter template for shipping web products fast".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

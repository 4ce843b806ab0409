//! Analytics configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Analytics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Whether tracking is forwarded to the analytics sink
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Minutes within which activity counts as recent
    #[serde(default = "default_recent_activity_minutes")]
    pub recent_activity_minutes: i64,
}

impl AnalyticsConfig {
    /// Validate analytics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.recent_activity_minutes <= 0 {
            return Err(ValidationError::InvalidActivityWindow);
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            recent_activity_minutes: default_recent_activity_minutes(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_recent_activity_minutes() -> i64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyticsConfig::default();
        assert!(config.enabled);
        assert_eq!(config.recent_activity_minutes, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_window() {
        let config = AnalyticsConfig {
            recent_activity_minutes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

//! Feature flags

use serde::Deserialize;

/// Runtime feature flags
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Publish engagement milestone events
    #[serde(default = "default_true")]
    pub engagement_milestones: bool,

    /// Send the internal contact notification on conversion
    #[serde(default)]
    pub contact_notifications: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            engagement_milestones: true,
            contact_notifications: false,
        }
    }
}

fn default_true() -> bool {
    true
}

//! Email configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Whether outbound email is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Internal address receiving contact-form notifications
    #[serde(default = "default_notifications_address")]
    pub notifications_address: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !self.notifications_address.contains('@') {
            return Err(ValidationError::InvalidNotificationsEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            notifications_address: default_notifications_address(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_from_email() -> String {
    "noreply@funnelcraft.dev".to_string()
}

fn default_from_name() -> String {
    "Funnelcraft".to_string()
}

fn default_notifications_address() -> String {
    "leads@funnelcraft.dev".to_string()
}

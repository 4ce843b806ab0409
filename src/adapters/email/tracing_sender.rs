//! Structured-log email sender.
//!
//! Renders outbound email and logs it instead of sending, recording each
//! send for test assertions. A production deployment would swap in a real
//! provider behind the same port.

use async_trait::async_trait;
use std::sync::RwLock;
use tracing::info;

use crate::config::EmailConfig;
use crate::domain::foundation::DomainError;
use crate::domain::visitor::ContactInfo;
use crate::ports::EmailSender;

/// A rendered email captured by the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Email sender backed by the tracing subscriber.
pub struct TracingEmailSender {
    config: EmailConfig,
    sent: RwLock<Vec<SentEmail>>,
}

impl TracingEmailSender {
    /// Creates a sender using the given email configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            sent: RwLock::new(Vec::new()),
        }
    }

    /// Emails captured so far (for test assertions).
    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent
            .read()
            .expect("TracingEmailSender: sent lock poisoned")
            .clone()
    }

    fn record(&self, email: SentEmail) {
        info!(
            target: "email",
            to = email.to.as_str(),
            subject = email.subject.as_str(),
            "email sent"
        );
        self.sent
            .write()
            .expect("TracingEmailSender: sent lock poisoned")
            .push(email);
    }
}

#[async_trait]
impl EmailSender for TracingEmailSender {
    async fn send_welcome_email(
        &self,
        contact_info: &ContactInfo,
        product_name: &str,
    ) -> Result<(), DomainError> {
        if !self.config.enabled {
            info!(target: "email", "email disabled, skipping welcome email");
            return Ok(());
        }

        let body = format!(
            "Dear {},\n\n\
             Thank you for your interest in {}!\n\n\
             We're excited to have you join our community. Check your inbox \
             for next steps, and reply to this email with any questions.\n\n\
             Best regards,\nThe {} Team",
            contact_info.display_name(),
            product_name,
            product_name,
        );

        self.record(SentEmail {
            to: contact_info.email().to_string(),
            subject: format!("Welcome to {}!", product_name),
            body,
        });
        Ok(())
    }

    async fn send_contact_notification(
        &self,
        contact_info: &ContactInfo,
    ) -> Result<(), DomainError> {
        if !self.config.enabled {
            info!(target: "email", "email disabled, skipping contact notification");
            return Ok(());
        }

        let body = format!(
            "New contact form submission received:\n\n\
             Name: {}\nEmail: {}\nCompany: {}\nMessage: {}\n\n\
             Please follow up with this lead.",
            contact_info.name().unwrap_or("Not provided"),
            contact_info.email(),
            contact_info.company().unwrap_or("Not provided"),
            contact_info.message().unwrap_or("No message provided"),
        );

        self.record(SentEmail {
            to: self.config.notifications_address.clone(),
            subject: format!(
                "New contact form submission from {}",
                contact_info.display_name()
            ),
            body,
        });
        Ok(())
    }
}

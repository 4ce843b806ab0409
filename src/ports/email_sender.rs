//! EmailSender port - outbound email contract.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::visitor::ContactInfo;

/// Port for sending transactional email.
///
/// Invoked once per successful conversion; implementations decide the
/// provider and template rendering.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send the welcome email to a converted visitor.
    async fn send_welcome_email(
        &self,
        contact_info: &ContactInfo,
        product_name: &str,
    ) -> Result<(), DomainError>;

    /// Notify the internal team about a new contact submission.
    async fn send_contact_notification(
        &self,
        contact_info: &ContactInfo,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn EmailSender) {}
}

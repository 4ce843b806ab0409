//! EventSubscriber port - Interface for subscribing to domain events.
//!
//! This port defines how handlers register interest in domain events
//! without knowing about the underlying transport mechanism.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// Implementations should be:
/// - **Idempotent** - Safe to call multiple times with same event
/// - **Quick** - Long operations should be queued for async processing
/// - **Isolated** - Errors don't affect other handlers
///
/// # Example
///
/// ```ignore
/// struct WelcomeEmailer { /* ... */ }
///
/// #[async_trait]
/// impl EventHandler for WelcomeEmailer {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let payload: VisitorConverted = event.payload_as()?;
///         // Send the welcome email...
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "WelcomeEmailer"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    ///
    /// This method should be idempotent - calling it multiple times
    /// with the same event should produce the same result.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging and error messages.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
///
/// Handlers register interest in specific event types and are invoked
/// when matching events are published.
pub trait EventSubscriber: Send + Sync {
    /// Register a handler for one event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Register a handler for several event types at once.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn EventSubscriber) {}
}

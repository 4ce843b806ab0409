//! EventPublisher port - Interface for publishing domain events.
//!
//! This port defines how the application publishes events without knowing
//! about the underlying transport mechanism (in-memory, message queue, etc.).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Events are delivered at-least-once (handlers may receive duplicates)
/// - A failure in one subscriber does not prevent delivery to the others
/// - Errors are reported to the caller after all deliveries were attempted
///
/// # Example
///
/// ```ignore
/// let envelope = event.to_envelope();
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    ///
    /// The event is wrapped in an `EventEnvelope` containing:
    /// - Event ID for deduplication
    /// - Event type for routing
    /// - Aggregate context for correlation
    /// - Metadata for tracing
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events in order.
    ///
    /// Best-effort sequential delivery; the first failing publish is
    /// reported after the remaining events were still attempted.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn EventPublisher) {}
}

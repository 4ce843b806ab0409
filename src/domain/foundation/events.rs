//! Event infrastructure for domain event publishing and handling.
//!
//! This module provides the core types and traits for event-driven flows:
//! - `EventId` - Unique identifier for events (deduplication)
//! - `EventMetadata` - Tracing and correlation context
//! - `EventEnvelope` - Transport wrapper for domain events
//! - `DomainEvent` - Trait that all domain events implement
//! - `domain_event!` - Macro to simplify DomainEvent implementations

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Trait that all domain events must implement.
///
/// Provides the contract for event identification, routing, and ordering.
/// Use the `domain_event!` macro to implement this trait with minimal
/// boilerplate.
///
/// For types that also implement `Serialize`, the `to_envelope()` method
/// is automatically available via the `SerializableDomainEvent` extension
/// trait.
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "visitor.converted").
    /// Used for routing and filtering.
    fn event_type(&self) -> &'static str;

    /// Returns the ID of the aggregate that emitted this event.
    fn aggregate_id(&self) -> String;

    /// Returns the type of aggregate (e.g., "Visitor", "Product").
    fn aggregate_type(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;

    /// Returns the unique ID for this event instance.
    fn event_id(&self) -> EventId;
}

/// Extension trait that provides `to_envelope()` for serializable domain events.
///
/// Automatically implemented for any type that implements both `DomainEvent`
/// and `Serialize`.
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    /// Converts this domain event into an `EventEnvelope` for transport.
    fn to_envelope(&self) -> EventEnvelope {
        EventEnvelope {
            event_id: self.event_id(),
            event_type: self.event_type().to_string(),
            aggregate_id: self.aggregate_id(),
            aggregate_type: self.aggregate_type().to_string(),
            occurred_at: self.occurred_at(),
            payload: serde_json::to_value(self)
                .expect("Event serialization should never fail for well-formed events"),
            metadata: EventMetadata::default(),
        }
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Macro to implement DomainEvent trait with minimal boilerplate.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct VisitorConverted {
///     pub event_id: EventId,
///     pub visitor_id: VisitorId,
///     pub converted_at: Timestamp,
/// }
///
/// domain_event!(
///     VisitorConverted,
///     event_type = "visitor.converted",
///     aggregate_id = visitor_id,
///     aggregate_type = "Visitor",
///     occurred_at = converted_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field.clone()
            }
        }
    };
}

// Re-export the macro
pub use domain_event;

/// Unique identifier for events (used for deduplication).
///
/// Structured IDs follow the `<kind>-<aggregateId>[-<discriminator>]-<epochMillis>`
/// convention used by event consumers for tracing. Millisecond resolution
/// means two events for the same aggregate and discriminator within the same
/// millisecond collide; consumers treat the ID as best-effort unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random EventId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a structured EventId for an aggregate.
    ///
    /// Format: `<kind>-<aggregate_id>[-<discriminator>]-<epoch_millis>`.
    pub fn for_aggregate(
        kind: &str,
        aggregate_id: &str,
        discriminator: Option<&str>,
        at: Timestamp,
    ) -> Self {
        let millis = at.as_unix_millis();
        match discriminator {
            Some(disc) => Self(format!("{}-{}-{}-{}", kind, aggregate_id, disc, millis)),
            None => Self(format!("{}-{}-{}", kind, aggregate_id, millis)),
        }
    }

    /// Creates an EventId from an existing string.
    ///
    /// No validation is performed - any non-empty string is accepted.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata for tracing and correlation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// ID linking related events across a single request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,

    /// ID of the event that directly caused this event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causation_id: Option<String>,

    /// Distributed tracing span/trace ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Transport envelope for domain events.
///
/// Wraps event-specific data with metadata needed for routing (event_type),
/// deduplication (event_id), correlation (aggregate_id, metadata), and
/// ordering (occurred_at).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique ID for this event instance.
    pub event_id: EventId,

    /// Event type for routing (e.g., "visitor.converted").
    pub event_type: String,

    /// ID of the aggregate that emitted this event.
    pub aggregate_id: String,

    /// Type of aggregate (e.g., "Visitor", "Product").
    pub aggregate_type: String,

    /// When the event occurred.
    pub occurred_at: Timestamp,

    /// Event-specific payload as JSON.
    pub payload: JsonValue,

    /// Tracing and correlation metadata.
    pub metadata: EventMetadata,
}

impl EventEnvelope {
    /// Creates a new EventEnvelope with required fields.
    pub fn new(
        event_type: impl Into<String>,
        aggregate_id: impl Into<String>,
        aggregate_type: impl Into<String>,
        payload: JsonValue,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            event_type: event_type.into(),
            aggregate_id: aggregate_id.into(),
            aggregate_type: aggregate_type.into(),
            occurred_at: Timestamp::now(),
            payload,
            metadata: EventMetadata::default(),
        }
    }

    /// Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.correlation_id = Some(id.into());
        self
    }

    /// Add causation ID (ID of event that caused this one).
    pub fn with_causation_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.causation_id = Some(id.into());
        self
    }

    /// Add trace ID for distributed tracing.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.trace_id = Some(id.into());
        self
    }

    /// Deserialize payload to a specific event type.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ============================================================
    // EventId Tests
    // ============================================================

    #[test]
    fn event_id_generates_unique_values() {
        let id1 = EventId::new();
        let id2 = EventId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn event_id_from_string_preserves_value() {
        let id = EventId::from_string("test-id-123");
        assert_eq!(id.as_str(), "test-id-123");
    }

    #[test]
    fn event_id_for_aggregate_uses_structured_format() {
        let at = Timestamp::from_unix_millis(1_700_000_000_000);
        let id = EventId::for_aggregate("visitor-converted", "v-1", None, at);
        assert_eq!(id.as_str(), "visitor-converted-v-1-1700000000000");
    }

    #[test]
    fn event_id_for_aggregate_includes_discriminator() {
        let at = Timestamp::from_unix_millis(42);
        let id = EventId::for_aggregate("engagement-milestone", "v-1", Some("first_interaction"), at);
        assert_eq!(id.as_str(), "engagement-milestone-v-1-first_interaction-42");
    }

    #[test]
    fn event_id_serializes_to_json() {
        let id = EventId::from_string("test-id");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""test-id""#);
    }

    #[test]
    fn event_id_displays_correctly() {
        let id = EventId::from_string("display-test");
        assert_eq!(format!("{}", id), "display-test");
    }

    // ============================================================
    // EventMetadata Tests
    // ============================================================

    #[test]
    fn event_metadata_default_has_all_none() {
        let meta = EventMetadata::default();
        assert!(meta.correlation_id.is_none());
        assert!(meta.causation_id.is_none());
        assert!(meta.trace_id.is_none());
    }

    #[test]
    fn event_metadata_serializes_without_none_fields() {
        let meta = EventMetadata {
            correlation_id: Some("req-123".to_string()),
            causation_id: None,
            trace_id: None,
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("correlation_id"));
        assert!(!json.contains("causation_id"));
        assert!(!json.contains("trace_id"));
    }

    // ============================================================
    // EventEnvelope Tests
    // ============================================================

    #[test]
    fn event_envelope_new_creates_with_defaults() {
        let envelope = EventEnvelope::new(
            "visitor.converted",
            "visitor-123",
            "Visitor",
            json!({"source": "cta"}),
        );

        assert_eq!(envelope.event_type, "visitor.converted");
        assert_eq!(envelope.aggregate_id, "visitor-123");
        assert_eq!(envelope.aggregate_type, "Visitor");
        assert_eq!(envelope.payload["source"], "cta");
        assert!(envelope.metadata.correlation_id.is_none());
    }

    #[test]
    fn event_envelope_builder_chain() {
        let envelope = EventEnvelope::new("test.event", "agg-1", "Test", json!({}))
            .with_correlation_id("req-123")
            .with_causation_id("evt-0")
            .with_trace_id("trace-789");

        assert_eq!(envelope.metadata.correlation_id, Some("req-123".to_string()));
        assert_eq!(envelope.metadata.causation_id, Some("evt-0".to_string()));
        assert_eq!(envelope.metadata.trace_id, Some("trace-789".to_string()));
    }

    #[test]
    fn event_envelope_serialization_round_trip() {
        let envelope = EventEnvelope::new(
            "visitor.converted",
            "visitor-123",
            "Visitor",
            json!({"source": "contact_form"}),
        )
        .with_correlation_id("req-456");

        let json = serde_json::to_string(&envelope).unwrap();
        let restored: EventEnvelope = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.event_id, envelope.event_id);
        assert_eq!(restored.event_type, envelope.event_type);
        assert_eq!(restored.aggregate_id, envelope.aggregate_id);
        assert_eq!(
            restored.metadata.correlation_id,
            envelope.metadata.correlation_id
        );
    }

    #[test]
    fn event_envelope_payload_as_deserializes() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct TestPayload {
            value: i32,
            name: String,
        }

        let envelope = EventEnvelope::new(
            "test.event",
            "agg-1",
            "Test",
            json!({"value": 42, "name": "test"}),
        );

        let payload: TestPayload = envelope.payload_as().unwrap();
        assert_eq!(payload.value, 42);
        assert_eq!(payload.name, "test");
    }

    #[test]
    fn event_envelope_payload_as_returns_error_on_mismatch() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct WrongPayload {
            missing_field: String,
        }

        let envelope =
            EventEnvelope::new("test.event", "agg-1", "Test", json!({"different": "data"}));

        let result: Result<WrongPayload, _> = envelope.payload_as();
        assert!(result.is_err());
    }

    // ============================================================
    // DomainEvent::to_envelope() Tests
    // ============================================================

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct TestVisitorSeen {
        event_id: EventId,
        visitor_id: String,
        page: String,
        occurred_at: Timestamp,
    }

    impl DomainEvent for TestVisitorSeen {
        fn event_type(&self) -> &'static str {
            "test.visitor.seen"
        }

        fn aggregate_id(&self) -> String {
            self.visitor_id.clone()
        }

        fn aggregate_type(&self) -> &'static str {
            "TestVisitor"
        }

        fn occurred_at(&self) -> Timestamp {
            self.occurred_at
        }

        fn event_id(&self) -> EventId {
            self.event_id.clone()
        }
    }

    #[test]
    fn domain_event_to_envelope_creates_valid_envelope() {
        let event = TestVisitorSeen {
            event_id: EventId::from_string("evt-123"),
            visitor_id: "visitor-456".to_string(),
            page: "https://example.com/".to_string(),
            occurred_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();

        assert_eq!(envelope.event_id.as_str(), "evt-123");
        assert_eq!(envelope.event_type, "test.visitor.seen");
        assert_eq!(envelope.aggregate_id, "visitor-456");
        assert_eq!(envelope.aggregate_type, "TestVisitor");
        assert_eq!(envelope.payload["page"], "https://example.com/");
    }

    #[test]
    fn domain_event_to_envelope_preserves_occurred_at() {
        let occurred_at = Timestamp::now();
        let event = TestVisitorSeen {
            event_id: EventId::new(),
            visitor_id: "visitor-1".to_string(),
            page: "https://example.com/".to_string(),
            occurred_at,
        };

        let envelope = event.to_envelope();

        assert_eq!(envelope.occurred_at, occurred_at);
    }

    #[test]
    fn domain_event_to_envelope_payload_round_trips() {
        let event = TestVisitorSeen {
            event_id: EventId::from_string("evt-789"),
            visitor_id: "visitor-abc".to_string(),
            page: "https://example.com/features".to_string(),
            occurred_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();
        let restored: TestVisitorSeen = envelope.payload_as().unwrap();

        assert_eq!(restored.event_id.as_str(), "evt-789");
        assert_eq!(restored.visitor_id, "visitor-abc");
        assert_eq!(restored.page, "https://example.com/features");
    }
}

//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Funnelcraft domain.

mod errors;
mod events;
mod ids;
mod score;
mod timestamp;
mod visitor_status;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{FeatureId, ProductId, SessionKey, VisitorId};
pub use score::EngagementScore;
pub use timestamp::Timestamp;
pub use visitor_status::VisitorStatus;

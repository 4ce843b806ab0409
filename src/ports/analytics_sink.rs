//! AnalyticsSink port - fire-and-forget analytics side channel.
//!
//! Tracking is a side effect of user flows; sink failures must never
//! propagate into the calling handler. Callers log and continue.

use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};

use crate::domain::foundation::{DomainError, VisitorId};
use crate::domain::visitor::AnalyticsEvent;

/// Conversion record forwarded to the analytics backend.
#[derive(Debug, Clone)]
pub struct ConversionRecord {
    /// Visitor who converted.
    pub visitor_id: VisitorId,

    /// Where the conversion happened.
    pub source: String,

    /// Monetary or point value assigned to the conversion.
    pub value: Option<f64>,

    /// Additional context (contact presence flags, campaign, etc.).
    pub metadata: Option<Map<String, JsonValue>>,
}

/// Port for forwarding tracking data to an analytics backend.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Track a single analytics event.
    async fn track_event(&self, event: &AnalyticsEvent) -> Result<(), DomainError>;

    /// Track a page view.
    async fn track_page_view(
        &self,
        page_url: &str,
        visitor_id: Option<&VisitorId>,
    ) -> Result<(), DomainError>;

    /// Track a conversion.
    async fn track_conversion(&self, record: ConversionRecord) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn AnalyticsSink) {}
}

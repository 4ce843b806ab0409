//! Structured-log analytics sink.
//!
//! Emits tracking data as structured tracing events and keeps counters and
//! captured conversion records so tests and dashboards can read activity
//! back. A production deployment would swap in a real analytics provider
//! behind the same port.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use tracing::info;

use crate::domain::foundation::{DomainError, VisitorId};
use crate::domain::visitor::AnalyticsEvent;
use crate::ports::{AnalyticsSink, ConversionRecord};

/// Analytics sink backed by the tracing subscriber.
pub struct TracingAnalyticsSink {
    events_tracked: AtomicUsize,
    page_views_tracked: AtomicUsize,
    conversions: RwLock<Vec<ConversionRecord>>,
}

impl TracingAnalyticsSink {
    /// Creates a sink with zeroed counters.
    pub fn new() -> Self {
        Self {
            events_tracked: AtomicUsize::new(0),
            page_views_tracked: AtomicUsize::new(0),
            conversions: RwLock::new(Vec::new()),
        }
    }

    /// Number of events tracked so far.
    pub fn events_tracked(&self) -> usize {
        self.events_tracked.load(Ordering::SeqCst)
    }

    /// Number of page views tracked so far.
    pub fn page_views_tracked(&self) -> usize {
        self.page_views_tracked.load(Ordering::SeqCst)
    }

    /// Captured conversion records (for test assertions).
    pub fn conversions(&self) -> Vec<ConversionRecord> {
        self.conversions
            .read()
            .expect("TracingAnalyticsSink: conversions lock poisoned")
            .clone()
    }
}

impl Default for TracingAnalyticsSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsSink for TracingAnalyticsSink {
    async fn track_event(&self, event: &AnalyticsEvent) -> Result<(), DomainError> {
        self.events_tracked.fetch_add(1, Ordering::SeqCst);
        info!(
            target: "analytics",
            event_type = %event.event_type(),
            page_url = event.page_url(),
            element_id = event.element_id(),
            element_name = event.element_name(),
            value = event.event_value(),
            "analytics event"
        );
        Ok(())
    }

    async fn track_page_view(
        &self,
        page_url: &str,
        visitor_id: Option<&VisitorId>,
    ) -> Result<(), DomainError> {
        self.page_views_tracked.fetch_add(1, Ordering::SeqCst);
        info!(
            target: "analytics",
            page_url,
            visitor_id = visitor_id.map(|id| id.as_str()),
            "page view"
        );
        Ok(())
    }

    async fn track_conversion(&self, record: ConversionRecord) -> Result<(), DomainError> {
        info!(
            target: "analytics",
            visitor_id = record.visitor_id.as_str(),
            source = record.source.as_str(),
            value = record.value,
            "conversion"
        );
        self.conversions
            .write()
            .expect("TracingAnalyticsSink: conversions lock poisoned")
            .push(record);
        Ok(())
    }
}

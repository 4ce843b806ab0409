//! AnalyticsEvent value object.
//!
//! Immutable record of one visitor interaction on the landing page.
//! Events are created once per interaction, never mutated, and held in a
//! visitor's engagement event list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Maximum points a time-spent event can contribute.
const TIME_SPENT_MAX_VALUE: f64 = 30.0;

/// Kind of visitor interaction being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsEventType {
    PageView,
    ButtonClick,
    FormSubmit,
    Scroll,
    TimeSpent,
    Conversion,
}

impl fmt::Display for AnalyticsEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalyticsEventType::PageView => "page_view",
            AnalyticsEventType::ButtonClick => "button_click",
            AnalyticsEventType::FormSubmit => "form_submit",
            AnalyticsEventType::Scroll => "scroll",
            AnalyticsEventType::TimeSpent => "time_spent",
            AnalyticsEventType::Conversion => "conversion",
        };
        write!(f, "{}", s)
    }
}

/// Immutable analytics event capturing one visitor interaction.
///
/// # Invariants
///
/// - `page_url` is a non-empty, well-formed URL
/// - all fields are fixed at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    event_type: AnalyticsEventType,
    timestamp: Timestamp,
    page_url: String,
    element_id: Option<String>,
    element_name: Option<String>,
    metadata: Option<Map<String, JsonValue>>,
}

impl AnalyticsEvent {
    /// Creates a new analytics event for the current moment.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `page_url` is empty
    /// - `InvalidFormat` if `page_url` does not parse as a URL
    pub fn new(
        event_type: AnalyticsEventType,
        page_url: impl Into<String>,
        element_id: Option<String>,
        element_name: Option<String>,
        metadata: Option<Map<String, JsonValue>>,
    ) -> Result<Self, ValidationError> {
        let page_url = page_url.into();
        Self::validate_page_url(&page_url)?;

        Ok(Self {
            event_type,
            timestamp: Timestamp::now(),
            page_url,
            element_id,
            element_name,
            metadata,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the event type.
    pub fn event_type(&self) -> AnalyticsEventType {
        self.event_type
    }

    /// Returns when the event was recorded.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Returns the page URL the interaction happened on.
    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Returns the DOM element ID, if any.
    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// Returns the human-readable element name, if any.
    pub fn element_name(&self) -> Option<&str> {
        self.element_name.as_deref()
    }

    /// Returns the opaque metadata map, if any.
    pub fn metadata(&self) -> Option<&Map<String, JsonValue>> {
        self.metadata.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Business rules
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns true for interactions that count as active engagement.
    pub fn is_engagement_event(&self) -> bool {
        matches!(
            self.event_type,
            AnalyticsEventType::ButtonClick
                | AnalyticsEventType::FormSubmit
                | AnalyticsEventType::Scroll
        )
    }

    /// Returns true if this event records a conversion.
    pub fn is_conversion_event(&self) -> bool {
        self.event_type == AnalyticsEventType::Conversion
    }

    /// Returns the deterministic point value of this event.
    ///
    /// Time-spent events derive their value from the `duration` metadata
    /// key (seconds), one point per ten seconds, capped at 30.
    pub fn event_value(&self) -> f64 {
        match self.event_type {
            AnalyticsEventType::Conversion => 100.0,
            AnalyticsEventType::FormSubmit => 50.0,
            AnalyticsEventType::ButtonClick => 20.0,
            AnalyticsEventType::Scroll => 10.0,
            AnalyticsEventType::PageView => 5.0,
            AnalyticsEventType::TimeSpent => {
                let duration = self
                    .metadata
                    .as_ref()
                    .and_then(|m| m.get("duration"))
                    .and_then(JsonValue::as_f64)
                    .unwrap_or(0.0);
                (duration / 10.0).min(TIME_SPENT_MAX_VALUE)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_page_url(page_url: &str) -> Result<(), ValidationError> {
        if page_url.trim().is_empty() {
            return Err(ValidationError::empty_field("page_url"));
        }
        url::Url::parse(page_url)
            .map_err(|e| ValidationError::invalid_format("page_url", e.to_string()))?;
        Ok(())
    }
}

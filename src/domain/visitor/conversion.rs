//! ConversionService - stateless conversion rules.
//!
//! Business logic for converting visitors into customers that does not
//! naturally belong to the Visitor entity itself: eligibility, the
//! conversion transaction, probability estimation, and insight reporting.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as JsonValue};

use crate::domain::foundation::{DomainError, EngagementScore, ErrorCode, VisitorStatus};
use crate::domain::visitor::{AnalyticsEvent, AnalyticsEventType, ContactInfo, Visitor};

/// Probability ceiling before actual conversion.
const PROBABILITY_CAP: f64 = 0.95;

/// Multiplier applied when the visitor was active recently.
const RECENT_ACTIVITY_BOOST: f64 = 1.2;

/// Conversion metrics for analytics reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionInsights {
    /// Whether the visitor has converted.
    pub is_converted: bool,

    /// Current engagement score.
    pub engagement_score: EngagementScore,

    /// Estimated conversion probability, 0.0 to 1.0.
    pub conversion_probability: f64,

    /// Milliseconds from first visit to conversion, absent if not converted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_convert_ms: Option<i64>,

    /// Element name of the most recent conversion event, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_source: Option<String>,
}

/// Stateless domain service for visitor conversion.
pub struct ConversionService;

impl ConversionService {
    /// Converts a visitor using the submitted contact details.
    ///
    /// On success the visitor is converted and a conversion analytics event
    /// carrying the source and contact presence flags is appended to its
    /// engagement history.
    ///
    /// # Errors
    ///
    /// - `AlreadyConverted` if the visitor has converted before
    /// - `ValidationFailed` if the conversion source is blank
    /// - `InvalidFormat` if `page_url` is not a well-formed URL
    pub fn convert_visitor(
        visitor: &mut Visitor,
        contact_info: ContactInfo,
        conversion_source: &str,
        page_url: &str,
    ) -> Result<(), DomainError> {
        if visitor.is_converted() {
            return Err(DomainError::new(
                ErrorCode::AlreadyConverted,
                "Visitor is already converted",
            ));
        }

        // ContactInfo construction already guarantees a non-empty email;
        // checked again so a future constructor change cannot silently
        // loosen the conversion contract.
        if contact_info.email().is_empty() {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Contact information must include an email address",
            ));
        }

        if conversion_source.trim().is_empty() {
            return Err(DomainError::validation(
                "conversion_source",
                "Conversion source is required",
            ));
        }

        let conversion_event = AnalyticsEvent::new(
            AnalyticsEventType::Conversion,
            page_url,
            None,
            Some(conversion_source.to_string()),
            Some(Self::conversion_metadata(&contact_info, conversion_source)),
        )?;

        visitor.convert(contact_info)?;
        visitor.add_engagement_event(conversion_event);

        Ok(())
    }

    /// Returns true if the visitor can still be converted.
    pub fn is_eligible_for_conversion(visitor: &Visitor) -> bool {
        !visitor.is_converted()
            && matches!(
                visitor.status(),
                VisitorStatus::Anonymous | VisitorStatus::Engaged
            )
    }

    /// Estimates conversion probability from visitor engagement.
    ///
    /// Converted visitors score 1.0. Otherwise the engagement score fraction,
    /// boosted for recent activity, capped at 0.95 until actual conversion.
    pub fn conversion_probability(visitor: &Visitor) -> f64 {
        if visitor.is_converted() {
            return 1.0;
        }

        let mut probability = visitor.engagement_score().as_fraction();
        if visitor.has_recent_activity() {
            probability *= RECENT_ACTIVITY_BOOST;
        }

        probability.min(PROBABILITY_CAP)
    }

    /// Gathers conversion metrics for analytics reporting.
    pub fn conversion_insights(visitor: &Visitor) -> ConversionInsights {
        let last_conversion_event = visitor
            .engagement_events()
            .iter()
            .filter(|event| event.is_conversion_event())
            .max_by_key(|event| *event.timestamp());

        ConversionInsights {
            is_converted: visitor.is_converted(),
            engagement_score: visitor.engagement_score(),
            conversion_probability: Self::conversion_probability(visitor),
            time_to_convert_ms: visitor
                .converted_at()
                .map(|converted| converted.millis_since(visitor.first_visit_at())),
            conversion_source: last_conversion_event
                .and_then(|event| event.element_name())
                .map(str::to_string),
        }
    }

    fn conversion_metadata(
        contact_info: &ContactInfo,
        conversion_source: &str,
    ) -> Map<String, JsonValue> {
        let mut metadata = Map::new();
        metadata.insert("source".to_string(), json!(conversion_source));
        metadata.insert("email".to_string(), json!(contact_info.email()));
        metadata.insert("has_name".to_string(), json!(contact_info.has_name()));
        metadata.insert("has_message".to_string(), json!(contact_info.has_message()));
        metadata.insert("has_company".to_string(), json!(contact_info.has_company()));
        metadata
    }
}

//! Visitor domain events.
//!
//! Events published when visitor lifecycle changes occur:
//! - `VisitorConverted` - Visitor submitted contact details
//! - `VisitorEngagementMilestone` - Engagement threshold reached

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, EngagementScore, EventId, SessionKey, Timestamp, VisitorId,
};
use crate::domain::visitor::ContactInfo;

/// Published when a visitor converts into a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorConverted {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the converted visitor.
    pub visitor_id: VisitorId,

    /// Session the conversion happened in.
    pub session_key: SessionKey,

    /// Contact details submitted at conversion.
    pub contact_info: ContactInfo,

    /// Where the conversion happened (e.g., "contact_form", "cta_button").
    pub conversion_source: String,

    /// When the conversion occurred.
    pub occurred_at: Timestamp,
}

impl VisitorConverted {
    /// Creates the event for a conversion that just happened.
    pub fn new(
        visitor_id: VisitorId,
        session_key: SessionKey,
        contact_info: ContactInfo,
        conversion_source: impl Into<String>,
    ) -> Self {
        let occurred_at = Timestamp::now();
        let event_id =
            EventId::for_aggregate("visitor-converted", visitor_id.as_str(), None, occurred_at);
        Self {
            event_id,
            visitor_id,
            session_key,
            contact_info,
            conversion_source: conversion_source.into(),
            occurred_at,
        }
    }
}

domain_event!(
    VisitorConverted,
    event_type = "visitor.converted",
    aggregate_id = visitor_id,
    aggregate_type = "Visitor",
    occurred_at = occurred_at,
    event_id = event_id
);

/// Published when a visitor crosses an engagement milestone.
///
/// Milestones are named thresholds (e.g., "first_interaction",
/// "high_engagement") checked after each tracked event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorEngagementMilestone {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the visitor who reached the milestone.
    pub visitor_id: VisitorId,

    /// Name of the milestone reached.
    pub milestone: String,

    /// Engagement score at the time the milestone was reached.
    pub engagement_score: EngagementScore,

    /// When the milestone was reached.
    pub occurred_at: Timestamp,
}

impl VisitorEngagementMilestone {
    /// Creates the event for a milestone that was just reached.
    pub fn new(
        visitor_id: VisitorId,
        milestone: impl Into<String>,
        engagement_score: EngagementScore,
    ) -> Self {
        let milestone = milestone.into();
        let occurred_at = Timestamp::now();
        let event_id = EventId::for_aggregate(
            "engagement-milestone",
            visitor_id.as_str(),
            Some(&milestone),
            occurred_at,
        );
        Self {
            event_id,
            visitor_id,
            milestone,
            engagement_score,
            occurred_at,
        }
    }
}

domain_event!(
    VisitorEngagementMilestone,
    event_type = "visitor.engagement_milestone",
    aggregate_id = visitor_id,
    aggregate_type = "Visitor",
    occurred_at = occurred_at,
    event_id = event_id
);

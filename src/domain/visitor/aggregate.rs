//! Visitor aggregate entity.
//!
//! A visitor is one tracked, session-scoped actor on the landing page.
//! It aggregates engagement events and status, and computes the bounded
//! engagement score used for conversion probability.
//!
//! # Ownership
//!
//! A visitor instance is owned exclusively by the orchestrating handler for
//! the duration of one request; serializing concurrent access per visitor is
//! the persistence layer's concern.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, EngagementScore, ErrorCode, SessionKey, Timestamp, VisitorId, VisitorStatus,
};
use crate::domain::visitor::{AnalyticsEvent, AnalyticsEventType};

/// Activity within this window counts as recent.
pub const RECENT_ACTIVITY_MINUTES: i64 = 30;

/// Base score contribution per engagement event.
const SCORE_PER_EVENT: u32 = 5;

/// Bonus applied when the visitor was active recently.
const RECENT_ACTIVITY_BONUS: u32 = 20;

/// Visitor aggregate - one tracked actor on the landing page.
///
/// # Invariants
///
/// - `status` follows the [`VisitorStatus`] state machine; Converted and
///   Bounced are terminal
/// - `converted_at` is set exactly once, at conversion
/// - `first_visit_at` never changes after creation
/// - `engagement_events` preserves insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    /// Unique identifier for this visitor.
    id: VisitorId,

    /// Browser session this visitor belongs to.
    session_key: SessionKey,

    /// Current lifecycle status.
    status: VisitorStatus,

    /// Contact details, present once converted.
    contact_info: Option<super::ContactInfo>,

    /// Recorded interactions, in insertion order.
    engagement_events: Vec<AnalyticsEvent>,

    /// When the visitor was first seen.
    first_visit_at: Timestamp,

    /// When the visitor last interacted.
    last_activity_at: Timestamp,

    /// When the visitor converted, if ever.
    converted_at: Option<Timestamp>,
}

impl Visitor {
    /// Creates a fresh anonymous visitor.
    ///
    /// Identifier validation happens in [`VisitorId`] and [`SessionKey`]
    /// construction; a `Visitor` can only be built from valid identifiers.
    pub fn new(id: VisitorId, session_key: SessionKey) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            session_key,
            status: VisitorStatus::Anonymous,
            contact_info: None,
            engagement_events: Vec::new(),
            first_visit_at: now,
            last_activity_at: now,
            converted_at: None,
        }
    }

    /// Reconstitute a visitor from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: VisitorId,
        session_key: SessionKey,
        status: VisitorStatus,
        contact_info: Option<super::ContactInfo>,
        engagement_events: Vec<AnalyticsEvent>,
        first_visit_at: Timestamp,
        last_activity_at: Timestamp,
        converted_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            session_key,
            status,
            contact_info,
            engagement_events,
            first_visit_at,
            last_activity_at,
            converted_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the visitor ID.
    pub fn id(&self) -> &VisitorId {
        &self.id
    }

    /// Returns the session key.
    pub fn session_key(&self) -> &SessionKey {
        &self.session_key
    }

    /// Returns the current status.
    pub fn status(&self) -> VisitorStatus {
        self.status
    }

    /// Returns the contact info, present once converted.
    pub fn contact_info(&self) -> Option<&super::ContactInfo> {
        self.contact_info.as_ref()
    }

    /// Returns the recorded engagement events in insertion order.
    pub fn engagement_events(&self) -> &[AnalyticsEvent] {
        &self.engagement_events
    }

    /// Returns when the visitor was first seen.
    pub fn first_visit_at(&self) -> &Timestamp {
        &self.first_visit_at
    }

    /// Returns when the visitor last interacted.
    pub fn last_activity_at(&self) -> &Timestamp {
        &self.last_activity_at
    }

    /// Returns when the visitor converted, if ever.
    pub fn converted_at(&self) -> Option<&Timestamp> {
        self.converted_at.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks the visitor as active right now.
    pub fn update_activity(&mut self) {
        self.last_activity_at = Timestamp::now();
    }

    /// Records an engagement event.
    ///
    /// Appends the event, touches the activity timestamp, and upgrades an
    /// anonymous visitor to Engaged on a button click or form submission.
    /// Terminal statuses are never overwritten.
    pub fn add_engagement_event(&mut self, event: AnalyticsEvent) {
        let qualifies = matches!(
            event.event_type(),
            AnalyticsEventType::ButtonClick | AnalyticsEventType::FormSubmit
        );

        self.engagement_events.push(event);
        self.update_activity();

        if qualifies && self.status.can_transition_to(&VisitorStatus::Engaged) {
            self.status = VisitorStatus::Engaged;
        }
    }

    /// Converts the visitor with the given contact details.
    ///
    /// # Errors
    ///
    /// - `AlreadyConverted` if the visitor has converted before
    /// - `InvalidStateTransition` if the visitor has bounced
    pub fn convert(&mut self, contact_info: super::ContactInfo) -> Result<(), DomainError> {
        if self.is_converted() {
            return Err(DomainError::new(
                ErrorCode::AlreadyConverted,
                "Visitor is already converted",
            ));
        }
        if !self.status.can_transition_to(&VisitorStatus::Converted) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Bounced visitors cannot be converted",
            ));
        }

        self.contact_info = Some(contact_info);
        self.status = VisitorStatus::Converted;
        self.converted_at = Some(Timestamp::now());
        self.update_activity();
        Ok(())
    }

    /// Marks an anonymous visitor as bounced.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless the visitor is anonymous
    pub fn mark_as_bounced(&mut self) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&VisitorStatus::Bounced) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Only anonymous visitors can be marked as bounced",
            ));
        }

        self.status = VisitorStatus::Bounced;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Business rules
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns true if the visitor is currently engaged.
    pub fn is_engaged(&self) -> bool {
        self.status == VisitorStatus::Engaged
    }

    /// Returns true if the visitor has converted.
    pub fn is_converted(&self) -> bool {
        self.status == VisitorStatus::Converted
    }

    /// Returns true if the visitor was active within the default window.
    pub fn has_recent_activity(&self) -> bool {
        self.has_recent_activity_within(RECENT_ACTIVITY_MINUTES)
    }

    /// Returns true if the visitor was active within the given window.
    pub fn has_recent_activity_within(&self, minutes_threshold: i64) -> bool {
        let threshold_ms = minutes_threshold * 60 * 1000;
        Timestamp::now().millis_since(&self.last_activity_at) < threshold_ms
    }

    /// Computes the bounded engagement score.
    ///
    /// Status base (Converted 100, Engaged 50, Anonymous 10, Bounced 0) plus
    /// five points per recorded event plus a recency bonus, clamped to 100.
    /// The clamp only caps; the score never drops below the status base.
    pub fn engagement_score(&self) -> EngagementScore {
        let base: u32 = match self.status {
            VisitorStatus::Converted => 100,
            VisitorStatus::Engaged => 50,
            VisitorStatus::Anonymous => 10,
            VisitorStatus::Bounced => 0,
        };

        let mut score = base + self.engagement_events.len() as u32 * SCORE_PER_EVENT;
        if self.has_recent_activity() {
            score += RECENT_ACTIVITY_BONUS;
        }

        EngagementScore::new(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::visitor::ContactInfo;

    const PAGE: &str = "https://example.com/";

    fn test_visitor() -> Visitor {
        Visitor::new(
            VisitorId::new("v-1").unwrap(),
            SessionKey::new("s-1").unwrap(),
        )
    }

    fn test_event(event_type: AnalyticsEventType) -> AnalyticsEvent {
        AnalyticsEvent::new(event_type, PAGE, None, None, None).unwrap()
    }

    fn test_contact() -> ContactInfo {
        ContactInfo::new("a@b.com", None, None, None).unwrap()
    }

    /// Rewinds last activity so the recency bonus does not apply.
    fn expire_activity(visitor: &mut Visitor) {
        visitor.last_activity_at = Timestamp::now().minus_minutes(RECENT_ACTIVITY_MINUTES + 1);
    }

    // Construction tests

    #[test]
    fn new_visitor_is_anonymous_with_no_events() {
        let visitor = test_visitor();
        assert_eq!(visitor.status(), VisitorStatus::Anonymous);
        assert!(visitor.engagement_events().is_empty());
        assert!(visitor.contact_info().is_none());
        assert!(visitor.converted_at().is_none());
    }

    #[test]
    fn new_visitor_first_visit_equals_last_activity() {
        let visitor = test_visitor();
        assert_eq!(visitor.first_visit_at(), visitor.last_activity_at());
    }

    // Engagement event tests

    #[test]
    fn add_engagement_event_appends_in_order() {
        let mut visitor = test_visitor();
        visitor.add_engagement_event(test_event(AnalyticsEventType::PageView));
        visitor.add_engagement_event(test_event(AnalyticsEventType::Scroll));

        assert_eq!(visitor.engagement_events().len(), 2);
        assert_eq!(
            visitor.engagement_events()[0].event_type(),
            AnalyticsEventType::PageView
        );
        assert_eq!(
            visitor.engagement_events()[1].event_type(),
            AnalyticsEventType::Scroll
        );
    }

    #[test]
    fn button_click_engages_anonymous_visitor() {
        let mut visitor = test_visitor();
        visitor.add_engagement_event(test_event(AnalyticsEventType::ButtonClick));
        assert_eq!(visitor.status(), VisitorStatus::Engaged);
        assert!(visitor.is_engaged());
    }

    #[test]
    fn form_submit_engages_anonymous_visitor() {
        let mut visitor = test_visitor();
        visitor.add_engagement_event(test_event(AnalyticsEventType::FormSubmit));
        assert_eq!(visitor.status(), VisitorStatus::Engaged);
    }

    #[test]
    fn page_view_does_not_engage() {
        let mut visitor = test_visitor();
        visitor.add_engagement_event(test_event(AnalyticsEventType::PageView));
        assert_eq!(visitor.status(), VisitorStatus::Anonymous);
    }

    #[test]
    fn scroll_does_not_engage() {
        let mut visitor = test_visitor();
        visitor.add_engagement_event(test_event(AnalyticsEventType::Scroll));
        assert_eq!(visitor.status(), VisitorStatus::Anonymous);
    }

    #[test]
    fn engagement_event_never_downgrades_converted_visitor() {
        let mut visitor = test_visitor();
        visitor.convert(test_contact()).unwrap();

        visitor.add_engagement_event(test_event(AnalyticsEventType::ButtonClick));

        assert_eq!(visitor.status(), VisitorStatus::Converted);
        assert_eq!(visitor.engagement_events().len(), 1);
    }

    #[test]
    fn engagement_event_does_not_revive_bounced_visitor() {
        let mut visitor = test_visitor();
        visitor.mark_as_bounced().unwrap();

        visitor.add_engagement_event(test_event(AnalyticsEventType::ButtonClick));

        assert_eq!(visitor.status(), VisitorStatus::Bounced);
    }

    // Conversion tests

    #[test]
    fn convert_sets_contact_status_and_timestamp() {
        let mut visitor = test_visitor();
        visitor.convert(test_contact()).unwrap();

        assert_eq!(visitor.status(), VisitorStatus::Converted);
        assert!(visitor.is_converted());
        assert_eq!(visitor.contact_info().unwrap().email(), "a@b.com");
        assert!(visitor.converted_at().is_some());
    }

    #[test]
    fn convert_twice_fails() {
        let mut visitor = test_visitor();
        visitor.convert(test_contact()).unwrap();

        let err = visitor.convert(test_contact()).unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyConverted);
        assert_eq!(err.message, "Visitor is already converted");
    }

    #[test]
    fn convert_works_from_engaged() {
        let mut visitor = test_visitor();
        visitor.add_engagement_event(test_event(AnalyticsEventType::ButtonClick));
        assert!(visitor.convert(test_contact()).is_ok());
    }

    #[test]
    fn convert_fails_from_bounced() {
        let mut visitor = test_visitor();
        visitor.mark_as_bounced().unwrap();

        let err = visitor.convert(test_contact()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    // Bounce tests

    #[test]
    fn mark_as_bounced_works_from_anonymous() {
        let mut visitor = test_visitor();
        visitor.mark_as_bounced().unwrap();
        assert_eq!(visitor.status(), VisitorStatus::Bounced);
    }

    #[test]
    fn mark_as_bounced_fails_from_engaged() {
        let mut visitor = test_visitor();
        visitor.add_engagement_event(test_event(AnalyticsEventType::ButtonClick));

        let err = visitor.mark_as_bounced().unwrap_err();
        assert_eq!(err.message, "Only anonymous visitors can be marked as bounced");
    }

    #[test]
    fn mark_as_bounced_fails_from_converted() {
        let mut visitor = test_visitor();
        visitor.convert(test_contact()).unwrap();
        assert!(visitor.mark_as_bounced().is_err());
    }

    // Recency tests

    #[test]
    fn fresh_visitor_has_recent_activity() {
        assert!(test_visitor().has_recent_activity());
    }

    #[test]
    fn stale_visitor_has_no_recent_activity() {
        let mut visitor = test_visitor();
        expire_activity(&mut visitor);
        assert!(!visitor.has_recent_activity());
    }

    #[test]
    fn recency_window_is_configurable() {
        let mut visitor = test_visitor();
        visitor.last_activity_at = Timestamp::now().minus_minutes(10);

        assert!(!visitor.has_recent_activity_within(5));
        assert!(visitor.has_recent_activity_within(15));
    }

    // Scoring tests

    #[test]
    fn fresh_visitor_scores_base_plus_recency_bonus() {
        // 10 (anonymous base) + 0 events + 20 (recent activity)
        assert_eq!(test_visitor().engagement_score().value(), 30);
    }

    #[test]
    fn stale_anonymous_visitor_scores_base_only() {
        let mut visitor = test_visitor();
        expire_activity(&mut visitor);
        assert_eq!(visitor.engagement_score().value(), 10);
    }

    #[test]
    fn engaged_visitor_with_one_event_scores_75() {
        // 50 (engaged base) + 5 (one event) + 20 (recent)
        let mut visitor = test_visitor();
        visitor.add_engagement_event(test_event(AnalyticsEventType::ButtonClick));
        assert_eq!(visitor.engagement_score().value(), 75);
    }

    #[test]
    fn score_clamps_at_100() {
        let mut visitor = test_visitor();
        for _ in 0..12 {
            visitor.add_engagement_event(test_event(AnalyticsEventType::ButtonClick));
        }
        // 50 + 60 + 20 would be 130 unclamped
        assert_eq!(visitor.engagement_score().value(), 100);
    }

    #[test]
    fn converted_visitor_scores_100() {
        let mut visitor = test_visitor();
        visitor.convert(test_contact()).unwrap();
        assert_eq!(visitor.engagement_score(), EngagementScore::MAX);
    }

    #[test]
    fn bounced_visitor_score_has_zero_base() {
        let mut visitor = test_visitor();
        visitor.mark_as_bounced().unwrap();
        expire_activity(&mut visitor);
        assert_eq!(visitor.engagement_score().value(), 0);
    }

    // Reconstitution

    #[test]
    fn reconstitute_preserves_all_fields() {
        let first = Timestamp::from_unix_millis(1_000);
        let last = Timestamp::from_unix_millis(2_000);
        let converted = Timestamp::from_unix_millis(2_000);

        let visitor = Visitor::reconstitute(
            VisitorId::new("v-9").unwrap(),
            SessionKey::new("s-9").unwrap(),
            VisitorStatus::Converted,
            Some(test_contact()),
            vec![test_event(AnalyticsEventType::Conversion)],
            first,
            last,
            Some(converted),
        );

        assert_eq!(visitor.id().as_str(), "v-9");
        assert_eq!(visitor.status(), VisitorStatus::Converted);
        assert_eq!(visitor.engagement_events().len(), 1);
        assert_eq!(visitor.first_visit_at(), &first);
        assert_eq!(visitor.converted_at(), Some(&converted));
    }
}

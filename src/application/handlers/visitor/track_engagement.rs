//! TrackEngagementHandler - Command handler for recording visitor engagement.

use std::sync::Arc;

use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

use crate::domain::foundation::{EngagementScore, SerializableDomainEvent, SessionKey};
use crate::domain::visitor::{
    AnalyticsEvent, AnalyticsEventType, Visitor, VisitorEngagementMilestone, VisitorError,
};
use crate::ports::{AnalyticsSink, EventPublisher, VisitorRepository};

/// Engagement milestones, checked in order after each tracked event.
///
/// A milestone is reached when both the event count and the engagement
/// score meet its thresholds. Reached milestones are re-published on every
/// qualifying event; consumers dedupe by milestone name.
const MILESTONES: [(&str, usize, u8); 4] = [
    ("first_interaction", 1, 10),
    ("engaged_visitor", 3, 30),
    ("high_engagement", 5, 50),
    ("very_high_engagement", 8, 80),
];

/// Command to record one engagement event for a session.
#[derive(Debug, Clone)]
pub struct TrackEngagementCommand {
    pub session_key: SessionKey,
    pub event_type: AnalyticsEventType,
    pub page_url: String,
    pub element_id: Option<String>,
    pub element_name: Option<String>,
    pub metadata: Option<Map<String, JsonValue>>,
}

/// Result of engagement tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackEngagementOutcome {
    /// First contact for this session; an anonymous visitor was created and
    /// the event itself was not recorded.
    VisitorCreated,
    /// The event was recorded against an existing visitor.
    Tracked {
        engagement_score: EngagementScore,
        milestones_published: usize,
    },
}

/// Handler for recording engagement events.
pub struct TrackEngagementHandler {
    visitor_repository: Arc<dyn VisitorRepository>,
    analytics: Arc<dyn AnalyticsSink>,
    event_publisher: Arc<dyn EventPublisher>,
    publish_milestones: bool,
}

impl TrackEngagementHandler {
    pub fn new(
        visitor_repository: Arc<dyn VisitorRepository>,
        analytics: Arc<dyn AnalyticsSink>,
        event_publisher: Arc<dyn EventPublisher>,
        publish_milestones: bool,
    ) -> Self {
        Self {
            visitor_repository,
            analytics,
            event_publisher,
            publish_milestones,
        }
    }

    pub async fn handle(
        &self,
        cmd: TrackEngagementCommand,
    ) -> Result<TrackEngagementOutcome, VisitorError> {
        // 1. Resolve the visitor; first contact only creates the record.
        let Some(mut visitor) = self
            .visitor_repository
            .find_by_session(&cmd.session_key)
            .await?
        else {
            self.visitor_repository.create(cmd.session_key).await?;
            return Ok(TrackEngagementOutcome::VisitorCreated);
        };

        // 2. Build and apply the analytics event.
        let event = AnalyticsEvent::new(
            cmd.event_type,
            cmd.page_url,
            cmd.element_id,
            cmd.element_name,
            cmd.metadata,
        )?;
        visitor.add_engagement_event(event.clone());

        // 3. Persist the updated visitor.
        self.visitor_repository.save(&visitor).await?;

        // 4. Forward to the analytics side channel; failures never break tracking.
        if let Err(e) = self.analytics.track_event(&event).await {
            warn!(error = %e, "analytics sink rejected engagement event");
        }

        // 5. Publish reached milestones, best-effort.
        let milestones_published = if self.publish_milestones {
            self.publish_reached_milestones(&visitor).await
        } else {
            0
        };

        Ok(TrackEngagementOutcome::Tracked {
            engagement_score: visitor.engagement_score(),
            milestones_published,
        })
    }

    async fn publish_reached_milestones(&self, visitor: &Visitor) -> usize {
        let engagement_score = visitor.engagement_score();
        let event_count = visitor.engagement_events().len();
        let mut published = 0;

        for (name, threshold, score) in MILESTONES {
            if event_count >= threshold && engagement_score.value() >= score {
                let milestone = VisitorEngagementMilestone::new(
                    visitor.id().clone(),
                    name,
                    engagement_score,
                );
                match self.event_publisher.publish(milestone.to_envelope()).await {
                    Ok(()) => {
                        published += 1;
                        debug!(milestone = name, visitor_id = %visitor.id(), "milestone published");
                    }
                    Err(e) => {
                        warn!(milestone = name, error = %e, "milestone publish failed");
                    }
                }
            }
        }

        published
    }
}

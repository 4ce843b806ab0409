//! ConvertVisitorHandler - Command handler for visitor conversion.

use std::sync::Arc;

use serde_json::{json, Map, Value as JsonValue};
use tracing::{info, warn};

use crate::domain::foundation::{SerializableDomainEvent, SessionKey, VisitorId};
use crate::domain::visitor::{ContactInfo, ConversionService, VisitorConverted, VisitorError};
use crate::ports::{
    AnalyticsSink, ConversionRecord, EmailSender, EventPublisher, ProductRepository,
    VisitorRepository,
};

/// Point value reported to analytics per conversion.
const CONVERSION_VALUE: f64 = 100.0;

/// Command to convert the visitor behind a session.
#[derive(Debug, Clone)]
pub struct ConvertVisitorCommand {
    pub session_key: SessionKey,
    pub email: String,
    pub name: Option<String>,
    pub message: Option<String>,
    pub company: Option<String>,
    pub source: String,
    pub page_url: String,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub visitor_id: VisitorId,
    pub message: String,
    pub next_steps: Vec<String>,
}

/// Handler for converting visitors.
pub struct ConvertVisitorHandler {
    visitor_repository: Arc<dyn VisitorRepository>,
    product_repository: Arc<dyn ProductRepository>,
    analytics: Arc<dyn AnalyticsSink>,
    event_publisher: Arc<dyn EventPublisher>,
    email_sender: Arc<dyn EmailSender>,
    notify_team: bool,
}

impl ConvertVisitorHandler {
    pub fn new(
        visitor_repository: Arc<dyn VisitorRepository>,
        product_repository: Arc<dyn ProductRepository>,
        analytics: Arc<dyn AnalyticsSink>,
        event_publisher: Arc<dyn EventPublisher>,
        email_sender: Arc<dyn EmailSender>,
        notify_team: bool,
    ) -> Self {
        Self {
            visitor_repository,
            product_repository,
            analytics,
            event_publisher,
            email_sender,
            notify_team,
        }
    }

    pub async fn handle(
        &self,
        cmd: ConvertVisitorCommand,
    ) -> Result<ConversionOutcome, VisitorError> {
        // 1. Resolve the visitor.
        let mut visitor = self
            .visitor_repository
            .find_by_session(&cmd.session_key)
            .await?
            .ok_or_else(|| VisitorError::not_found(cmd.session_key.clone()))?;

        // 2. Eligibility gate before any mutation.
        if !ConversionService::is_eligible_for_conversion(&visitor) {
            return Err(VisitorError::not_eligible());
        }

        // 3. Build the contact value object from form input.
        let contact_info = ContactInfo::new(cmd.email, cmd.name, cmd.message, cmd.company)?;

        // 4. Apply the domain conversion rules.
        ConversionService::convert_visitor(
            &mut visitor,
            contact_info.clone(),
            &cmd.source,
            &cmd.page_url,
        )?;

        // 5. Persist the converted visitor.
        self.visitor_repository.save(&visitor).await?;
        info!(visitor_id = %visitor.id(), source = cmd.source.as_str(), "visitor converted");

        // 6. Analytics side channel; failures never undo a conversion.
        let record = ConversionRecord {
            visitor_id: visitor.id().clone(),
            source: cmd.source.clone(),
            value: Some(CONVERSION_VALUE),
            metadata: Some(Self::conversion_metadata(&contact_info)),
        };
        if let Err(e) = self.analytics.track_conversion(record).await {
            warn!(error = %e, "analytics sink rejected conversion");
        }

        // 7. Publish the domain event.
        let event = VisitorConverted::new(
            visitor.id().clone(),
            visitor.session_key().clone(),
            contact_info.clone(),
            cmd.source.clone(),
        );
        self.event_publisher.publish(event.to_envelope()).await?;

        // 8. Send the welcome email (and the internal notification when enabled).
        let product = self.product_repository.product().await?;
        self.email_sender
            .send_welcome_email(&contact_info, product.name())
            .await?;
        if self.notify_team {
            self.email_sender
                .send_contact_notification(&contact_info)
                .await?;
        }

        Ok(ConversionOutcome {
            visitor_id: visitor.id().clone(),
            message: "Conversion successful! Welcome email sent.".to_string(),
            next_steps: vec![
                "Check your email for next steps".to_string(),
                "Join our community".to_string(),
                format!("Start building with {}", product.name()),
            ],
        })
    }

    fn conversion_metadata(contact_info: &ContactInfo) -> Map<String, JsonValue> {
        let mut metadata = Map::new();
        metadata.insert("email".to_string(), json!(contact_info.email()));
        metadata.insert("has_name".to_string(), json!(contact_info.has_name()));
        metadata.insert("has_message".to_string(), json!(contact_info.has_message()));
        metadata.insert("has_company".to_string(), json!(contact_info.has_company()));
        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::analytics::TracingAnalyticsSink;
    use crate::adapters::email::TracingEmailSender;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::{InMemoryProductRepository, InMemoryVisitorRepository};
    use crate::config::EmailConfig;
    use crate::domain::foundation::ProductId;
    use crate::domain::product::Product;

    fn session(key: &str) -> SessionKey {
        SessionKey::new(key).unwrap()
    }

    fn command(session_key: SessionKey) -> ConvertVisitorCommand {
        ConvertVisitorCommand {
            session_key,
            email: "Ada@Example.com".to_string(),
            name: Some("Ada".to_string()),
            message: None,
            company: None,
            source: "contact_form".to_string(),
            page_url: "https://example.com/".to_string(),
        }
    }

    struct Fixture {
        repo: Arc<InMemoryVisitorRepository>,
        analytics: Arc<TracingAnalyticsSink>,
        bus: Arc<InMemoryEventBus>,
        email: Arc<TracingEmailSender>,
        handler: ConvertVisitorHandler,
    }

    fn fixture_with_notify(notify_team: bool) -> Fixture {
        let repo = Arc::new(InMemoryVisitorRepository::new());
        let product = Product::new(
            ProductId::new("p-1").unwrap(),
            "Launchpad",
            "Starter template",
            "1.0.0",
            Vec::new(),
        )
        .unwrap();
        let products = Arc::new(InMemoryProductRepository::seeded(product));
        let analytics = Arc::new(TracingAnalyticsSink::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let email = Arc::new(TracingEmailSender::new(EmailConfig::default()));
        let handler = ConvertVisitorHandler::new(
            repo.clone(),
            products,
            analytics.clone(),
            bus.clone(),
            email.clone(),
            notify_team,
        );
        Fixture {
            repo,
            analytics,
            bus,
            email,
            handler,
        }
    }

    fn fixture() -> Fixture {
        fixture_with_notify(false)
    }

    #[tokio::test]
    async fn conversion_succeeds_for_existing_visitor() {
        let f = fixture();
        f.repo.create(session("s-1")).await.unwrap();

        let outcome = f.handler.handle(command(session("s-1"))).await.unwrap();

        assert_eq!(outcome.message, "Conversion successful! Welcome email sent.");
        assert_eq!(outcome.next_steps.len(), 3);

        let visitor = f.repo.find_by_session(&session("s-1")).await.unwrap().unwrap();
        assert!(visitor.is_converted());
        assert_eq!(visitor.contact_info().unwrap().email(), "ada@example.com");
        // The conversion analytics event was appended to the visitor.
        assert_eq!(visitor.engagement_events().len(), 1);
        assert!(visitor.engagement_events()[0].is_conversion_event());
    }

    #[tokio::test]
    async fn conversion_fails_for_unknown_session() {
        let f = fixture();

        let err = f.handler.handle(command(session("missing"))).await.unwrap_err();
        assert!(matches!(err, VisitorError::NotFound(_)));
    }

    #[tokio::test]
    async fn second_conversion_is_rejected() {
        let f = fixture();
        f.repo.create(session("s-1")).await.unwrap();
        f.handler.handle(command(session("s-1"))).await.unwrap();

        let err = f.handler.handle(command(session("s-1"))).await.unwrap_err();
        assert_eq!(err, VisitorError::NotEligible);
    }

    #[tokio::test]
    async fn bounced_visitor_is_rejected() {
        let f = fixture();
        let mut visitor = f.repo.create(session("s-1")).await.unwrap();
        visitor.mark_as_bounced().unwrap();
        f.repo.save(&visitor).await.unwrap();

        let err = f.handler.handle(command(session("s-1"))).await.unwrap_err();
        assert_eq!(err, VisitorError::NotEligible);
    }

    #[tokio::test]
    async fn invalid_email_fails_before_any_mutation() {
        let f = fixture();
        f.repo.create(session("s-1")).await.unwrap();

        let mut cmd = command(session("s-1"));
        cmd.email = "not-an-email".to_string();

        let err = f.handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, VisitorError::ValidationFailed { .. }));

        let visitor = f.repo.find_by_session(&session("s-1")).await.unwrap().unwrap();
        assert!(!visitor.is_converted());
        assert_eq!(f.bus.event_count(), 0);
        assert!(f.email.sent_emails().is_empty());
    }

    #[tokio::test]
    async fn conversion_publishes_domain_event() {
        let f = fixture();
        f.repo.create(session("s-1")).await.unwrap();

        let outcome = f.handler.handle(command(session("s-1"))).await.unwrap();

        let events = f.bus.events_of_type("visitor.converted");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].aggregate_id, outcome.visitor_id.to_string());
        assert_eq!(events[0].payload["conversion_source"], "contact_form");
    }

    #[tokio::test]
    async fn conversion_tracks_analytics_record() {
        let f = fixture();
        f.repo.create(session("s-1")).await.unwrap();

        f.handler.handle(command(session("s-1"))).await.unwrap();

        let conversions = f.analytics.conversions();
        assert_eq!(conversions.len(), 1);
        assert_eq!(conversions[0].source, "contact_form");
        assert_eq!(conversions[0].value, Some(CONVERSION_VALUE));
        let metadata = conversions[0].metadata.as_ref().unwrap();
        assert_eq!(metadata["has_name"], true);
        assert_eq!(metadata["has_company"], false);
    }

    #[tokio::test]
    async fn conversion_sends_welcome_email() {
        let f = fixture();
        f.repo.create(session("s-1")).await.unwrap();

        f.handler.handle(command(session("s-1"))).await.unwrap();

        let sent = f.email.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ada@example.com");
        assert!(sent[0].subject.contains("Launchpad"));
    }

    #[tokio::test]
    async fn notify_team_sends_internal_notification() {
        let f = fixture_with_notify(true);
        f.repo.create(session("s-1")).await.unwrap();

        f.handler.handle(command(session("s-1"))).await.unwrap();

        let sent = f.email.sent_emails();
        assert_eq!(sent.len(), 2);
        assert!(sent[1].subject.contains("contact form submission"));
    }

    #[tokio::test]
    async fn blank_source_is_rejected() {
        let f = fixture();
        f.repo.create(session("s-1")).await.unwrap();

        let mut cmd = command(session("s-1"));
        cmd.source = "  ".to_string();

        let err = f.handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, VisitorError::ValidationFailed { .. }));
    }
}

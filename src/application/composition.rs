//! Composition root - explicit dependency wiring.
//!
//! Constructs adapters and handlers from configuration and passes every
//! dependency through constructors. No ambient global state; tests build
//! isolated roots in parallel.

use std::sync::Arc;

use crate::adapters::analytics::TracingAnalyticsSink;
use crate::adapters::email::TracingEmailSender;
use crate::adapters::events::InMemoryEventBus;
use crate::adapters::memory::{InMemoryProductRepository, InMemoryVisitorRepository};
use crate::application::handlers::{
    ConvertVisitorHandler, TrackEngagementHandler, ViewLandingPageHandler,
    ViewProductFeatureHandler,
};
use crate::config::AppConfig;
use crate::domain::foundation::{ProductId, ValidationError};
use crate::domain::product::Product;

/// Fully wired application: adapters plus the handler set.
///
/// Concrete adapter handles stay visible so embedding code (and tests) can
/// subscribe to the event bus or read captured analytics and email.
pub struct CompositionRoot {
    pub visitor_repository: Arc<InMemoryVisitorRepository>,
    pub product_repository: Arc<InMemoryProductRepository>,
    pub event_bus: Arc<InMemoryEventBus>,
    pub analytics: Arc<TracingAnalyticsSink>,
    pub email_sender: Arc<TracingEmailSender>,

    pub track_engagement: TrackEngagementHandler,
    pub convert_visitor: ConvertVisitorHandler,
    pub view_landing_page: ViewLandingPageHandler,
    pub view_product_feature: ViewProductFeatureHandler,
}

impl CompositionRoot {
    /// Wires the application from configuration.
    ///
    /// Seeds the product repository from the configured product.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the configured product is invalid.
    pub fn new(config: AppConfig) -> Result<Self, ValidationError> {
        let product = Product::new(
            ProductId::new(config.product.id.clone())?,
            config.product.name.clone(),
            config.product.description.clone(),
            config.product.version.clone(),
            Vec::new(),
        )?;
        Self::with_product(config, product)
    }

    /// Wires the application around an explicit product aggregate.
    pub fn with_product(config: AppConfig, product: Product) -> Result<Self, ValidationError> {
        let visitor_repository = Arc::new(InMemoryVisitorRepository::new());
        let product_repository = Arc::new(InMemoryProductRepository::seeded(product));
        let event_bus = Arc::new(InMemoryEventBus::new());
        let analytics = Arc::new(TracingAnalyticsSink::new());
        let email_sender = Arc::new(TracingEmailSender::new(config.email.clone()));

        let track_engagement = TrackEngagementHandler::new(
            visitor_repository.clone(),
            analytics.clone(),
            event_bus.clone(),
            config.features.engagement_milestones,
        );
        let convert_visitor = ConvertVisitorHandler::new(
            visitor_repository.clone(),
            product_repository.clone(),
            analytics.clone(),
            event_bus.clone(),
            email_sender.clone(),
            config.features.contact_notifications,
        );
        let view_landing_page = ViewLandingPageHandler::new(
            product_repository.clone(),
            visitor_repository.clone(),
            analytics.clone(),
        );
        let view_product_feature =
            ViewProductFeatureHandler::new(product_repository.clone(), event_bus.clone());

        Ok(Self {
            visitor_repository,
            product_repository,
            event_bus,
            analytics,
            email_sender,
            track_engagement,
            convert_visitor,
            view_landing_page,
            view_product_feature,
        })
    }
}

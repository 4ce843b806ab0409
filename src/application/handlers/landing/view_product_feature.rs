//! ViewProductFeatureHandler - Command handler for feature view tracking.

use std::sync::Arc;

use crate::domain::foundation::{
    DomainError, ErrorCode, FeatureId, SerializableDomainEvent, VisitorId,
};
use crate::domain::product::ProductFeatureViewed;
use crate::ports::{EventPublisher, ProductRepository};

/// Command to record a visitor viewing a product feature.
#[derive(Debug, Clone)]
pub struct ViewProductFeatureCommand {
    pub visitor_id: VisitorId,
    pub feature_id: FeatureId,
}

/// Handler for feature view tracking.
pub struct ViewProductFeatureHandler {
    product_repository: Arc<dyn ProductRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ViewProductFeatureHandler {
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            product_repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ViewProductFeatureCommand,
    ) -> Result<ProductFeatureViewed, DomainError> {
        // 1. Resolve the feature on the showcased product.
        let product = self.product_repository.product().await?;
        let feature = product.feature(&cmd.feature_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::FeatureNotFound,
                format!("Feature with id {} not found", cmd.feature_id),
            )
        })?;

        // 2. Publish the view event.
        let event = ProductFeatureViewed::new(
            cmd.visitor_id,
            product.id().clone(),
            feature.id().clone(),
            feature.name(),
        );
        self.event_publisher.publish(event.to_envelope()).await?;

        Ok(event)
    }
}

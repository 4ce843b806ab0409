//! Product domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, EventId, FeatureId, ProductId, Timestamp, VisitorId,
};

/// Published when a visitor views a highlighted product feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFeatureViewed {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Visitor who viewed the feature.
    pub visitor_id: VisitorId,

    /// Product the feature belongs to.
    pub product_id: ProductId,

    /// Feature that was viewed.
    pub feature_id: FeatureId,

    /// Display name of the feature at view time.
    pub feature_name: String,

    /// When the view occurred.
    pub occurred_at: Timestamp,
}

impl ProductFeatureViewed {
    /// Creates the event for a feature view that just happened.
    pub fn new(
        visitor_id: VisitorId,
        product_id: ProductId,
        feature_id: FeatureId,
        feature_name: impl Into<String>,
    ) -> Self {
        let occurred_at = Timestamp::now();
        let event_id = EventId::for_aggregate(
            "feature-viewed",
            visitor_id.as_str(),
            Some(feature_id.as_str()),
            occurred_at,
        );
        Self {
            event_id,
            visitor_id,
            product_id,
            feature_id,
            feature_name: feature_name.into(),
            occurred_at,
        }
    }
}

domain_event!(
    ProductFeatureViewed,
    event_type = "product.feature_viewed",
    aggregate_id = product_id,
    aggregate_type = "Product",
    occurred_at = occurred_at,
    event_id = event_id
);

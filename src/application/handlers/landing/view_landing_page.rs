//! ViewLandingPageHandler - Query handler for landing page display.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::{
    DomainError, EngagementScore, SessionKey, Timestamp, VisitorId, VisitorStatus,
};
use crate::domain::product::FeatureCategory;
use crate::ports::{AnalyticsSink, ProductRepository, VisitorRepository};

/// Query for assembling the landing page.
#[derive(Debug, Clone)]
pub struct ViewLandingPageQuery {
    pub session_key: SessionKey,
    pub page_url: String,
}

/// Feature projection for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: FeatureCategory,
    pub icon: Option<String>,
    pub priority: u8,
}

/// Product projection for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub feature_count: usize,
    pub featured_features: Vec<FeatureView>,
}

/// Visitor projection for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorSnapshot {
    pub id: VisitorId,
    pub session_key: SessionKey,
    pub status: VisitorStatus,
    pub first_visit_at: Timestamp,
    pub last_activity_at: Timestamp,
    pub converted_at: Option<Timestamp>,
    pub engagement_score: EngagementScore,
    pub engagement_event_count: usize,
}

/// Assembled landing page data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingPageView {
    pub product: ProductSummary,
    pub visitor: VisitorSnapshot,
}

/// Handler for landing page display.
pub struct ViewLandingPageHandler {
    product_repository: Arc<dyn ProductRepository>,
    visitor_repository: Arc<dyn VisitorRepository>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl ViewLandingPageHandler {
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        visitor_repository: Arc<dyn VisitorRepository>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            product_repository,
            visitor_repository,
            analytics,
        }
    }

    pub async fn handle(&self, query: ViewLandingPageQuery) -> Result<LandingPageView, DomainError> {
        // 1. Get or create the visitor for this session.
        let visitor = match self
            .visitor_repository
            .find_by_session(&query.session_key)
            .await?
        {
            Some(visitor) => visitor,
            None => self.visitor_repository.create(query.session_key).await?,
        };

        // 2. Track the page view; failures never break page display.
        if let Err(e) = self
            .analytics
            .track_page_view(&query.page_url, Some(visitor.id()))
            .await
        {
            warn!(error = %e, "analytics sink rejected page view");
        }

        // 3. Assemble the projections.
        let product = self.product_repository.product().await?;
        let featured_features = self
            .product_repository
            .featured_features()
            .await?
            .into_iter()
            .map(|feature| FeatureView {
                id: feature.id().to_string(),
                name: feature.name().to_string(),
                description: feature.description().to_string(),
                category: feature.category(),
                icon: feature.icon().map(str::to_string),
                priority: feature.priority(),
            })
            .collect();

        Ok(LandingPageView {
            product: ProductSummary {
                id: product.id().to_string(),
                name: product.name().to_string(),
                description: product.description().to_string(),
                version: product.version().to_string(),
                feature_count: product.features().len(),
                featured_features,
            },
            visitor: VisitorSnapshot {
                id: visitor.id().clone(),
                session_key: visitor.session_key().clone(),
                status: visitor.status(),
                first_visit_at: *visitor.first_visit_at(),
                last_activity_at: *visitor.last_activity_at(),
                converted_at: visitor.converted_at().copied(),
                engagement_score: visitor.engagement_score(),
                engagement_event_count: visitor.engagement_events().len(),
            },
        })
    }
}

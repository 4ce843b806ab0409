//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports,
//! plus the composition root that wires adapters into handlers.

mod composition;
pub mod handlers;

pub use composition::CompositionRoot;
pub use handlers::{
    ConversionOutcome, ConvertVisitorCommand, ConvertVisitorHandler, FeatureView,
    LandingPageView, ProductSummary, TrackEngagementCommand, TrackEngagementHandler,
    TrackEngagementOutcome, ViewLandingPageHandler, ViewLandingPageQuery,
    ViewProductFeatureCommand, ViewProductFeatureHandler, VisitorSnapshot,
};

//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod landing;
pub mod visitor;

pub use landing::{
    FeatureView, LandingPageView, ProductSummary, ViewLandingPageHandler, ViewLandingPageQuery,
    ViewProductFeatureCommand, ViewProductFeatureHandler, VisitorSnapshot,
};
pub use visitor::{
    ConversionOutcome, ConvertVisitorCommand, ConvertVisitorHandler, TrackEngagementCommand,
    TrackEngagementHandler, TrackEngagementOutcome,
};

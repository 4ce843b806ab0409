//! Visitor command handlers.

mod convert_visitor;
mod track_engagement;

pub use convert_visitor::{ConversionOutcome, ConvertVisitorCommand, ConvertVisitorHandler};
pub use track_engagement::{
    TrackEngagementCommand, TrackEngagementHandler, TrackEngagementOutcome,
};

//! Visitor module - engagement tracking and conversion.
//!
//! The visitor aggregate records engagement events, computes the bounded
//! engagement score, and transitions through the Anonymous -> Engaged ->
//! Converted (or Bounced) lifecycle. The conversion service holds the
//! stateless rules around eligibility and the conversion transaction.

mod aggregate;
mod analytics_event;
mod contact_info;
mod conversion;
mod errors;
mod events;

pub use aggregate::{Visitor, RECENT_ACTIVITY_MINUTES};
pub use analytics_event::{AnalyticsEvent, AnalyticsEventType};
pub use contact_info::{
    ContactInfo, MAX_COMPANY_LENGTH, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH,
};
pub use conversion::{ConversionInsights, ConversionService};
pub use errors::VisitorError;
pub use events::{VisitorConverted, VisitorEngagementMilestone};

//! Product module - the offering showcased on the landing page.

mod aggregate;
mod events;
mod feature;

pub use aggregate::Product;
pub use events::ProductFeatureViewed;
pub use feature::{
    Feature, FeatureCategory, HIGH_PRIORITY_THRESHOLD, MAX_PRIORITY, MEDIUM_PRIORITY_THRESHOLD,
};

//! Landing page handlers.

mod view_landing_page;
mod view_product_feature;

pub use view_landing_page::{
    FeatureView, LandingPageView, ProductSummary, ViewLandingPageHandler, ViewLandingPageQuery,
    VisitorSnapshot,
};
pub use view_product_feature::{ViewProductFeatureCommand, ViewProductFeatureHandler};

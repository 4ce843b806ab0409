//! Ports layer - collaborator interfaces implemented by adapters.
//!
//! The application layer depends on these traits only; concrete transports
//! and stores live in `adapters`.

mod analytics_sink;
mod email_sender;
mod event_publisher;
mod event_subscriber;
mod product_repository;
mod visitor_repository;

pub use analytics_sink::{AnalyticsSink, ConversionRecord};
pub use email_sender::EmailSender;
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventHandler, EventSubscriber};
pub use product_repository::ProductRepository;
pub use visitor_repository::{VisitorRepository, VisitorStatistics};

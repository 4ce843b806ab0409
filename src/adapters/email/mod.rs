//! Email adapters.

mod tracing_sender;

pub use tracing_sender::{SentEmail, TracingEmailSender};

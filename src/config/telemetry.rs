//! Tracing subscriber initialization.

use tracing_subscriber::{fmt, EnvFilter};

use super::ServerConfig;

/// Initialize the global tracing subscriber.
///
/// Filter directives come from `RUST_LOG` when set, falling back to the
/// configured log level. Production environments emit JSON lines; other
/// environments use the human-readable format.
///
/// Call once from the embedding binary's composition root. Subsequent calls
/// are no-ops.
pub fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.is_production() {
        let _ = fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init();
    } else {
        let _ = fmt().with_env_filter(filter).try_init();
    }
}

//! Diagnostic logging to stderr.
//!
//! Merge output goes to stdout, so every log line is written to stderr.

use crate::infrastructure::LogLevel;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "HEADMERGE_LOG";

/// Build the filter: `HEADMERGE_LOG` when set and valid, else the given level
fn filter_for(level: LogLevel) -> EnvFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_filter_str()))
}

/// Initialise the global tracing subscriber.
///
/// A second call is a no-op: the first subscriber wins.
pub fn init_logging(level: LogLevel) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

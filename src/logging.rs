//! Tracing subscriber setup for the wikibot binaries.

use tracing_subscriber::EnvFilter;

/// Pick the filter: `RUST_LOG` wins, then the configured directive, then
/// [`crate::config::DEFAULT_LOG_FILTER`].
pub fn env_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
}

/// Install a formatting subscriber writing to stderr.
///
/// Stdout is left to command output. Calling this twice is harmless; the
/// second install is ignored.
pub fn init(configured: &str) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(configured))
        .try_init();
}

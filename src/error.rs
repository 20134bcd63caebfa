//! Error types for the wikibot host.

/// Top-level error type for the host crate.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// Configuration file could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The lookup client rejected its configuration.
    #[error(transparent)]
    Resolve(#[from] wiki_resolve::WikiError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, BotError>;

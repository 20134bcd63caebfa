//! Error types for the wiki-resolve crate.
//!
//! Transport and decode errors stay inside the crate: the public lookup
//! functions collapse them into [`crate::LookupOutcome::NotFound`] after
//! logging. Only configuration errors reach the caller.

/// Errors that can occur while talking to the upstream APIs.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    /// The request could not be sent or the body could not be read.
    /// Timeouts, DNS failures and connection resets all land here.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for WikiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Convenience type alias for wiki-resolve results.
pub type Result<T> = std::result::Result<T, WikiError>;

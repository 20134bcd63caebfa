//! Single-attempt HTTP fetching for the upstream APIs.
//!
//! Provides the [`Fetch`] seam used by [`crate::WikiClient`] and its
//! production implementation [`HttpFetcher`], a [`reqwest::Client`] with a
//! fixed identifying User-Agent and a short timeout.

use std::future::Future;
use std::time::Duration;

use crate::config::WikiConfig;
use crate::error::WikiError;

/// Something that can GET a URL and hand back the raw body.
///
/// Implementations return the body for any HTTP status as long as the
/// exchange completed; interpreting an empty or unexpected body is the
/// caller's job. Every failure to complete the exchange is reported as
/// [`WikiError::Transport`].
pub trait Fetch: Send + Sync {
    /// Issue one GET request. No retries.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, WikiError>> + Send;
}

/// Build a [`reqwest::Client`] configured for the upstream APIs.
///
/// The client has:
/// - The fixed User-Agent from config
/// - Timeout from config, covering connect and body read
///
/// # Errors
///
/// Returns [`WikiError::Config`] if the client cannot be constructed.
pub fn build_client(config: &WikiConfig) -> Result<reqwest::Client, WikiError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| WikiError::Config(format!("failed to build HTTP client: {e}")))
}

/// [`Fetch`] implementation backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from config.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &WikiConfig) -> Result<Self, WikiError> {
        Ok(Self {
            client: build_client(config)?,
        })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, WikiError> {
        tracing::debug!(url, "fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WikiError::Transport(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| WikiError::Transport(format!("response read failed: {e}")))?;

        tracing::trace!(%status, bytes = body.len(), "response received");
        Ok(body.to_vec())
    }
}

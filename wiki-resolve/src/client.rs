//! The lookup client: one method per upstream endpoint.
//!
//! Every method builds its URL from the configured [`crate::Endpoints`],
//! issues a single fetch and decodes the body. Transport failures and
//! undecodable bodies are logged and come back as
//! [`LookupOutcome::NotFound`]; callers only ever see "found" or "not found".

use chrono::NaiveDate;

use crate::config::WikiConfig;
use crate::date::{correct_for_utc, format_human, parse_date_or, utc_today};
use crate::error::WikiError;
use crate::http::{Fetch, HttpFetcher};
use crate::language::resolve_query;
use crate::normalize::{decode_pageviews, decode_related, decode_search, decode_summary};
use crate::query::sanitize;
use crate::types::{LookupOutcome, RankedArticle, ResolvedQuery, TopPageviews};

/// Client for the summary, related, search and pageviews lookups.
///
/// Holds only immutable configuration and a fetcher, so a single client can
/// serve concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct WikiClient<F = HttpFetcher> {
    config: WikiConfig,
    fetcher: F,
}

impl WikiClient<HttpFetcher> {
    /// Build a client that talks HTTP to the configured endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Config`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: WikiConfig) -> Result<Self, WikiError> {
        config.validate()?;
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }
}

impl<F: Fetch> WikiClient<F> {
    /// Build a client over a custom [`Fetch`] implementation.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Config`] if the configuration is invalid.
    pub fn with_fetcher(config: WikiConfig, fetcher: F) -> Result<Self, WikiError> {
        config.validate()?;
        Ok(Self { config, fetcher })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Split the language tag out of raw text, using the configured default.
    pub fn resolve_query(&self, text: &str) -> ResolvedQuery {
        resolve_query(text, &self.config.default_language)
    }

    /// Fetch the summary of the page with the given title.
    pub async fn fetch_summary(&self, title: &str, lang: &str) -> LookupOutcome {
        let url = self.config.endpoints.summary_url(lang, &sanitize(title));
        match self.get("summary", &url).await {
            Some(body) => decode_summary(&body),
            None => LookupOutcome::NotFound,
        }
    }

    /// Fetch pages related to the given title.
    pub async fn fetch_related(&self, title: &str, lang: &str) -> LookupOutcome {
        let url = self.config.endpoints.related_url(lang, &sanitize(title));
        match self.get("related", &url).await {
            Some(body) => decode_related(&body),
            None => LookupOutcome::NotFound,
        }
    }

    /// Run a near-match generator search for free text.
    pub async fn fetch_search(&self, term: &str, lang: &str) -> LookupOutcome {
        let url = self.config.endpoints.search_url(lang, &sanitize(term));
        match self.get("search", &url).await {
            Some(body) => decode_search(&body),
            None => LookupOutcome::NotFound,
        }
    }

    /// Fetch the most viewed articles of one calendar day.
    ///
    /// The date is used as given; see [`WikiClient::resolve_top_pageviews`]
    /// for the UTC-corrected flow.
    pub async fn fetch_top_pageviews(
        &self,
        date: NaiveDate,
        lang: &str,
    ) -> LookupOutcome<RankedArticle> {
        let endpoints = &self.config.endpoints;
        let url = endpoints.pageviews_url(lang, &self.config.project, date);
        match self.get("pageviews", &url).await {
            Some(body) => decode_pageviews(&body, |id| endpoints.article_url(lang, id)),
            None => LookupOutcome::NotFound,
        }
    }

    /// Parse a free-form date, step it back one day if UTC has not reached
    /// it yet, and fetch that day's top pageviews.
    pub async fn resolve_top_pageviews(&self, text: &str, lang: &str) -> TopPageviews {
        self.resolve_top_pageviews_at(text, lang, utc_today()).await
    }

    /// [`WikiClient::resolve_top_pageviews`] against an explicit UTC day.
    pub async fn resolve_top_pageviews_at(
        &self,
        text: &str,
        lang: &str,
        today: NaiveDate,
    ) -> TopPageviews {
        let date = correct_for_utc(parse_date_or(text, today), today);
        if date.is_corrected() {
            tracing::debug!(
                requested = %format_human(date.requested),
                resolved = %format_human(date.resolved),
                "requested day not yet published, using previous day"
            );
        }
        let outcome = self.fetch_top_pageviews(date.resolved, lang).await;
        TopPageviews { date, outcome }
    }

    /// Fetch a URL, logging and swallowing transport errors.
    async fn get(&self, lookup: &'static str, url: &str) -> Option<Vec<u8>> {
        match self.fetcher.fetch(url).await {
            Ok(body) => Some(body),
            Err(err) => {
                tracing::warn!(lookup, url, error = %err, "lookup failed");
                None
            }
        }
    }
}

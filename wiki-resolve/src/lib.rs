//! # wiki-resolve
//!
//! Resolves free-form user queries into normalized Wikipedia article data.
//!
//! ## Design
//!
//! - Inline `lang=xx` tags pick the language edition; everything else is the
//!   search term
//! - REST summary lookup first, Action API near-match search as fallback
//! - Three upstream JSON shapes normalized into one [`Article`] type, with
//!   search relevance order restored from each page's `index`
//! - Top-pageviews lookup with UTC day-boundary correction
//! - A single bounded-timeout attempt per upstream hop; failures surface as
//!   [`LookupOutcome::NotFound`], never as errors
//!
//! Presentation is left to the caller: every entry point returns typed data.

pub mod client;
pub mod config;
pub mod date;
pub mod error;
pub mod http;
pub mod language;
pub mod normalize;
pub mod query;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::WikiClient;
pub use config::{Endpoints, WikiConfig};
pub use error::{Result, WikiError};
pub use http::{Fetch, HttpFetcher};
pub use language::extract_language;
pub use query::sanitize;
pub use types::{
    Article, DateCorrection, LookupOutcome, RankedArticle, Resolution, ResolvedQuery,
    TopPageviews,
};

/// Resolve free text with a one-off client.
///
/// Convenience wrapper around [`WikiClient::resolve_general_term`].
///
/// # Errors
///
/// Returns [`WikiError::Config`] if `config` is invalid. Lookup failures are
/// reported inside the [`Resolution`], not as errors.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> wiki_resolve::Result<()> {
/// let config = wiki_resolve::WikiConfig::default();
/// let resolution = wiki_resolve::resolve_general_term("lang=fr Tour Eiffel", &config).await?;
/// for article in resolution.primary.items() {
///     println!("{}: {}", article.title, article.canonical_url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn resolve_general_term(text: &str, config: &WikiConfig) -> Result<Resolution> {
    let client = WikiClient::new(config.clone())?;
    Ok(client.resolve_general_term(text).await)
}

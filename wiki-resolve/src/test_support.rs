//! In-memory [`Fetch`] double and JSON fixtures for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::WikiError;
use crate::http::Fetch;

/// Serves canned bodies by exact URL and records every request.
/// Unknown URLs fail like an unreachable host.
#[derive(Debug, Default)]
pub(crate) struct FixtureFetcher {
    routes: HashMap<String, Vec<u8>>,
    requested: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    pub(crate) fn route(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(url.to_owned(), body.into());
        self
    }

    /// URLs fetched so far, in call order.
    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl Fetch for FixtureFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, WikiError> {
        if let Ok(mut urls) = self.requested.lock() {
            urls.push(url.to_owned());
        }
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| WikiError::Transport(format!("no fixture for {url}")))
    }
}

/// A REST summary body for `title`.
pub(crate) fn summary_json(title: &str) -> String {
    let slug = title.replace(' ', "_");
    format!(
        r#"{{"title": "{slug}", "titles": {{"normalized": "{title}"}},
            "extract": "About {title}.",
            "content_urls": {{"desktop": {{"page": "https://en.wikipedia.org/wiki/{slug}"}}}}}}"#
    )
}

/// A REST related body listing `titles` in order.
pub(crate) fn related_json(titles: &[&str]) -> String {
    let pages: Vec<String> = titles
        .iter()
        .map(|title| {
            let slug = title.replace(' ', "_");
            format!(
                r#"{{"titles": {{"normalized": "{title}"}}, "extract": "About {title}.",
                    "content_urls": {{"desktop": {{"page": "https://en.wikipedia.org/wiki/{slug}"}}}}}}"#
            )
        })
        .collect();
    format!(r#"{{"pages": [{}]}}"#, pages.join(","))
}

/// An Action API search body with `(title, index)` pairs in the given
/// (deliberately arbitrary) key order.
pub(crate) fn search_json(pages: &[(&str, u32)]) -> String {
    let entries: Vec<String> = pages
        .iter()
        .enumerate()
        .map(|(i, (title, index))| {
            let slug = title.replace(' ', "_");
            format!(
                r#""{id}": {{"pageid": {id}, "title": "{title}", "index": {index},
                    "extract": "About {title}.",
                    "canonicalurl": "https://en.wikipedia.org/wiki/{slug}"}}"#,
                id = 1000 + i
            )
        })
        .collect();
    format!(r#"{{"query": {{"pages": {{{}}}}}}}"#, entries.join(","))
}

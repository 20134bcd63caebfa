//! The summary → search fallback for general term lookups.
//!
//! # Pipeline
//!
//! 1. Summary lookup on the normalized term. On a hit, fetch related pages
//!    for the summary's canonical title and stop.
//! 2. On a miss, run the search lookup on the same term.
//!    - No results: nothing found, no related pages.
//!    - One result, or a top result whose title equals the term ignoring
//!      case: treat it as the page the user meant. Keep only that article and
//!      fetch its related pages.
//!    - Otherwise: return every search result with no related pages, for the
//!      caller to present as a disambiguation list.
//!
//! Related lookups are best-effort; a miss there only empties `related`.
//! All hops run sequentially.

use crate::http::Fetch;
use crate::types::{Article, LookupOutcome, Resolution};
use crate::WikiClient;

impl<F: Fetch> WikiClient<F> {
    /// Resolve free text into an article, a disambiguation list, or nothing.
    ///
    /// An inline `lang=` tag selects the language edition. An empty term is
    /// not rejected here; callers that want to prompt for input should check
    /// [`crate::ResolvedQuery::normalized_term`].
    pub async fn resolve_general_term(&self, text: &str) -> Resolution {
        let query = self.resolve_query(text);
        let lang = query.language.as_str();
        let term = query.normalized_term.as_str();

        let summary = self.fetch_summary(term, lang).await;
        if let Some(canonical) = summary.first().map(|article| article.title.clone()) {
            let related = self.fetch_related(&canonical, lang).await.into_items();
            return Resolution {
                primary: summary,
                related,
                query,
            };
        }

        tracing::debug!(term, lang, "summary missed, falling back to search");
        let candidates = self.fetch_search(term, lang).await.into_items();

        if candidates.is_empty() {
            tracing::debug!(term, lang, "search found nothing");
            return Resolution {
                primary: LookupOutcome::NotFound,
                related: Vec::new(),
                query,
            };
        }

        match confident_match(&candidates, term).cloned() {
            Some(top) => {
                let related = self.fetch_related(&top.title, lang).await.into_items();
                Resolution {
                    primary: LookupOutcome::Found(vec![top]),
                    related,
                    query,
                }
            }
            None => {
                tracing::debug!(term, count = candidates.len(), "search is ambiguous");
                Resolution {
                    primary: LookupOutcome::from_vec(candidates),
                    related: Vec::new(),
                    query,
                }
            }
        }
    }
}

/// Pick the search result to treat as the intended page, if any.
///
/// A lone result is always taken. Otherwise the top result must match the
/// term ignoring case.
fn confident_match<'a>(candidates: &'a [Article], term: &str) -> Option<&'a Article> {
    let top = candidates.first()?;
    let exact = top.title.to_lowercase() == term.trim().to_lowercase();
    (candidates.len() == 1 || exact).then_some(top)
}

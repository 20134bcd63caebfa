//! Analytics decoder for the `metrics/pageviews/top` endpoint.

use serde::Deserialize;

use crate::query::sanitize;
use crate::types::{LookupOutcome, RankedArticle};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageviewsResponse {
    detail: String,
    items: Vec<PageviewsItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageviewsItem {
    articles: Vec<PageviewsEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageviewsEntry {
    article: String,
    views: u64,
    rank: u32,
}

/// Decode a top-pageviews response.
///
/// Reads the first item's article list in upstream (rank) order. Titles get
/// underscores replaced by spaces; `article_url` receives the sanitized
/// identifier and returns the article link. An upstream error payload (a
/// non-empty `detail`) is logged and yields `NotFound`, as does an empty
/// item list.
pub fn decode_pageviews<F>(body: &[u8], article_url: F) -> LookupOutcome<RankedArticle>
where
    F: Fn(&str) -> String,
{
    let record = match serde_json::from_slice::<PageviewsResponse>(body) {
        Ok(record) => record,
        Err(err) => {
            tracing::debug!(error = %err, "failed to decode pageviews response");
            return LookupOutcome::NotFound;
        }
    };

    if !record.detail.trim().is_empty() {
        tracing::warn!(detail = %record.detail, "pageviews lookup rejected upstream");
        return LookupOutcome::NotFound;
    }

    let Some(item) = record.items.into_iter().next() else {
        tracing::debug!("pageviews response has no items");
        return LookupOutcome::NotFound;
    };

    LookupOutcome::from_vec(
        item.articles
            .into_iter()
            .filter(|entry| !entry.article.is_empty())
            .map(|entry| RankedArticle {
                title: entry.article.replace('_', " "),
                url: article_url(&sanitize(&entry.article)),
                rank: entry.rank,
                view_count: entry.views.to_string(),
            })
            .collect(),
    )
}

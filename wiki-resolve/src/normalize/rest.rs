//! REST API decoders: `page/summary` (one page) and `page/related` (a list).

use serde::Deserialize;

use super::{image_url, Thumbnail};
use crate::types::{Article, LookupOutcome};

/// Title the REST API puts in its error payload when a page does not exist.
const NOT_FOUND_TITLE: &str = "Not found.";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestPage {
    title: String,
    titles: Titles,
    extract: String,
    thumbnail: Option<Thumbnail>,
    content_urls: ContentUrls,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Titles {
    normalized: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentUrls {
    desktop: PageUrls,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageUrls {
    page: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RelatedResponse {
    pages: Vec<RestPage>,
}

impl RestPage {
    /// Convert into an [`Article`], or `None` for an untitled or sentinel page.
    fn into_article(self) -> Option<Article> {
        let title = if self.titles.normalized.trim().is_empty() {
            self.title
        } else {
            self.titles.normalized
        };
        let title = title.trim().to_owned();
        if title.is_empty() || title == NOT_FOUND_TITLE {
            return None;
        }

        Some(Article {
            title,
            extract: self.extract.trim().to_owned(),
            image_url: image_url(self.thumbnail),
            canonical_url: self.content_urls.desktop.page,
            rank: 0,
        })
    }
}

/// Decode a `page/summary` response.
///
/// Returns `NotFound` if the body is not a page object or carries the
/// upstream "Not found." error title.
pub fn decode_summary(body: &[u8]) -> LookupOutcome {
    match serde_json::from_slice::<RestPage>(body) {
        Ok(page) => match page.into_article() {
            Some(article) => LookupOutcome::Found(vec![article]),
            None => {
                tracing::debug!("summary response has no usable page");
                LookupOutcome::NotFound
            }
        },
        Err(err) => {
            tracing::debug!(error = %err, "failed to decode summary response");
            LookupOutcome::NotFound
        }
    }
}

/// Decode a `page/related` response, keeping upstream order. Ranks stay 0.
pub fn decode_related(body: &[u8]) -> LookupOutcome {
    match serde_json::from_slice::<RelatedResponse>(body) {
        Ok(record) => LookupOutcome::from_vec(
            record
                .pages
                .into_iter()
                .filter_map(RestPage::into_article)
                .collect(),
        ),
        Err(err) => {
            tracing::debug!(error = %err, "failed to decode related response");
            LookupOutcome::NotFound
        }
    }
}

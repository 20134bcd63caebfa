//! Core types for normalized articles and lookup outcomes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One encyclopedia page, normalized regardless of which upstream schema
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Display title of the page.
    pub title: String,
    /// Plain-text extract, whitespace-trimmed.
    pub extract: String,
    /// Thumbnail URL, if the page has one.
    pub image_url: Option<String>,
    /// Canonical desktop URL of the page.
    pub canonical_url: String,
    /// Upstream relevance position. `0` means unranked; only the search
    /// lookup assigns ranks.
    pub rank: u32,
}

/// One entry of a top-pageviews listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedArticle {
    /// Title with underscores replaced by spaces.
    pub title: String,
    /// Article URL built from the raw identifier.
    pub url: String,
    /// Popularity rank as reported upstream (1 is the most viewed).
    pub rank: u32,
    /// View count, stringified for display.
    pub view_count: String,
}

/// Result of a single lookup.
///
/// `Found` always holds at least one entry; build values with
/// [`LookupOutcome::from_vec`] to keep that guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupOutcome<T = Article> {
    /// Upstream returned content.
    Found(Vec<T>),
    /// Nothing usable came back: transport failure, undecodable body, or an
    /// explicit upstream "no content" signal.
    NotFound,
}

impl<T> LookupOutcome<T> {
    /// Wrap a list, mapping an empty one to [`LookupOutcome::NotFound`].
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::NotFound
        } else {
            Self::Found(items)
        }
    }

    /// Returns `true` for [`LookupOutcome::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found items, or an empty slice.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Found(items) => items,
            Self::NotFound => &[],
        }
    }

    /// The first (highest-ranked) item, if any.
    pub fn first(&self) -> Option<&T> {
        self.items().first()
    }

    /// Consume into the found items, or an empty vec.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Found(items) => items,
            Self::NotFound => Vec::new(),
        }
    }

    /// Number of found items.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Returns `true` for [`LookupOutcome::NotFound`].
    pub fn is_empty(&self) -> bool {
        !self.is_found()
    }
}

impl LookupOutcome<RankedArticle> {
    /// Drop entries whose title is in `excluded`, keeping upstream order.
    ///
    /// Usually called with [`crate::WikiConfig::excluded_pageview_titles`].
    /// Returns `NotFound` if every entry was excluded.
    pub fn without_titles<S: AsRef<str>>(self, excluded: &[S]) -> Self {
        let kept = self
            .into_items()
            .into_iter()
            .filter(|article| !excluded.iter().any(|t| t.as_ref() == article.title))
            .collect();
        Self::from_vec(kept)
    }
}

/// Language and trimmed term extracted from raw user text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedQuery {
    /// Language code, either from an inline `lang=` tag or the default.
    pub language: String,
    /// The remaining text with the tag removed and whitespace trimmed.
    pub normalized_term: String,
}

/// Output of [`crate::WikiClient::resolve_general_term`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The article found, or a disambiguation list when several search
    /// matches were equally plausible.
    pub primary: LookupOutcome,
    /// Pages related to the resolved article. Empty for disambiguation
    /// lists and misses.
    pub related: Vec<Article>,
    /// The language and term the lookups ran with.
    pub query: ResolvedQuery,
}

impl Resolution {
    /// `true` when `primary` is a list of candidates rather than a single
    /// resolved article.
    pub fn is_disambiguation(&self) -> bool {
        self.primary.len() > 1
    }
}

/// A requested calendar day and the day actually queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCorrection {
    /// The date parsed from the caller's text.
    pub requested: NaiveDate,
    /// The date used for the lookup.
    pub resolved: NaiveDate,
}

impl DateCorrection {
    /// `true` if the lookup date differs from the requested one.
    pub fn is_corrected(&self) -> bool {
        self.requested != self.resolved
    }
}

/// Output of [`crate::WikiClient::resolve_top_pageviews`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPageviews {
    /// Which day was asked for and which day was looked up.
    pub date: DateCorrection,
    /// The ranked listing for `date.resolved`.
    pub outcome: LookupOutcome<RankedArticle>,
}

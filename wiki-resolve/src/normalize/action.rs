//! Action API decoder for `generator=search` page maps.
//!
//! The Action API returns `query.pages` as an object keyed by page id. The
//! keys carry no ordering; relevance lives in each page's `index` field. The
//! map is read into a vector in document order and then stable-sorted by
//! `index`, so the output never depends on map iteration order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::{image_url, Thumbnail};
use crate::types::{Article, LookupOutcome};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeneratorResponse {
    query: Option<GeneratorQuery>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeneratorQuery {
    #[serde(deserialize_with = "pages_in_document_order")]
    pages: Vec<GeneratorPage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeneratorPage {
    title: String,
    index: Option<u32>,
    extract: String,
    thumbnail: Option<Thumbnail>,
    canonicalurl: String,
}

/// Read a `{ "<pageid>": page, ... }` object as a list, dropping the ids.
fn pages_in_document_order<'de, D>(deserializer: D) -> Result<Vec<GeneratorPage>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PagesVisitor;

    impl<'de> Visitor<'de> for PagesVisitor {
        type Value = Vec<GeneratorPage>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from page id to page object")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pages = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((_id, page)) = map.next_entry::<String, GeneratorPage>()? {
                pages.push(page);
            }
            Ok(pages)
        }
    }

    deserializer.deserialize_map(PagesVisitor)
}

/// Decode a generator search response into articles ordered by relevance.
///
/// Each article's `rank` is the upstream `index`. Pages are stable-sorted by
/// that index; pages without one sort last and stay unranked.
pub fn decode_search(body: &[u8]) -> LookupOutcome {
    let record = match serde_json::from_slice::<GeneratorResponse>(body) {
        Ok(record) => record,
        Err(err) => {
            tracing::debug!(error = %err, "failed to decode search response");
            return LookupOutcome::NotFound;
        }
    };

    let Some(query) = record.query else {
        tracing::debug!("search response has no query block");
        return LookupOutcome::NotFound;
    };

    let mut pages: Vec<GeneratorPage> = query
        .pages
        .into_iter()
        .filter(|page| !page.title.trim().is_empty())
        .collect();
    pages.sort_by_key(|page| page.index.unwrap_or(u32::MAX));

    LookupOutcome::from_vec(
        pages
            .into_iter()
            .map(|page| Article {
                title: page.title.trim().to_owned(),
                extract: page.extract.trim().to_owned(),
                image_url: image_url(page.thumbnail),
                canonical_url: page.canonicalurl,
                rank: page.index.unwrap_or(0),
            })
            .collect(),
    )
}

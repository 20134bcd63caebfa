//! Decoders that turn upstream JSON into normalized articles.
//!
//! Each upstream endpoint has its own shape; the caller picks the decoder
//! matching the endpoint it hit. Decoders never fail: a body that cannot be
//! decoded, or that decodes to "no content", becomes
//! [`crate::LookupOutcome::NotFound`] and the reason is logged.

pub mod action;
pub mod pageviews;
pub mod rest;

pub use action::decode_search;
pub use pageviews::decode_pageviews;
pub use rest::{decode_related, decode_summary};

use serde::Deserialize;

/// Image reference shared by the REST and Action API shapes.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Thumbnail {
    source: String,
}

/// Turn an optional thumbnail into an optional, non-empty URL.
fn image_url(thumbnail: Option<Thumbnail>) -> Option<String> {
    thumbnail
        .map(|t| t.source)
        .filter(|source| !source.trim().is_empty())
}

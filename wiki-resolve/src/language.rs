//! Inline language tag extraction.
//!
//! Users pick a language edition by writing `lang=xx` as a separate word
//! anywhere in their query, e.g. `lang=fr tour eiffel`.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::ResolvedQuery;

/// The `lang=` key is matched case-sensitively and only as a whole
/// whitespace-delimited word.
fn tag_regex() -> Option<&'static Regex> {
    static TAG: OnceLock<Option<Regex>> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"(?:^|\s)lang=([A-Za-z_-]+)(?:\s|$)").ok())
        .as_ref()
}

/// Split an inline `lang=<code>` tag out of `text`.
///
/// Returns `(language, remainder)`. The first tag found wins; the whole tag
/// and the whitespace around it are removed from the remainder. Without a
/// tag, `default_language` is returned together with the trimmed input.
///
/// The code is not validated against the set of real language editions; an
/// unknown edition simply makes the lookups come back empty.
pub fn extract_language(text: &str, default_language: &str) -> (String, String) {
    let Some(caps) = tag_regex().and_then(|re| re.captures(text)) else {
        return (default_language.to_owned(), text.trim().to_owned());
    };
    let (Some(whole), Some(code)) = (caps.get(0), caps.get(1)) else {
        return (default_language.to_owned(), text.trim().to_owned());
    };

    let before = text[..whole.start()].trim();
    let after = text[whole.end()..].trim();
    let remainder = match (before.is_empty(), after.is_empty()) {
        (true, _) => after.to_owned(),
        (false, true) => before.to_owned(),
        (false, false) => format!("{before} {after}"),
    };

    (code.as_str().to_owned(), remainder)
}

/// Extract the language tag and trim the remaining term.
pub fn resolve_query(text: &str, default_language: &str) -> ResolvedQuery {
    let (language, normalized_term) = extract_language(text, default_language);
    ResolvedQuery {
        language,
        normalized_term,
    }
}

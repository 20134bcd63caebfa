//! Query sanitization for URL path segments and search parameters.

/// Prepare text for use inside an upstream URL.
///
/// Trims surrounding whitespace and percent-encodes everything except the
/// unreserved characters `A-Z a-z 0-9 - _ . ~`. Spaces become `%20`, never
/// `+`: the REST API does not treat `+` as a space in path segments. A
/// literal `+` in the input is encoded as `%2B`. Casing is preserved.
pub fn sanitize(text: &str) -> String {
    urlencoding::encode(text.trim()).into_owned()
}

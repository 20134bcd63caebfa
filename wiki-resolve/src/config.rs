//! Client configuration with production defaults.
//!
//! [`WikiConfig`] is an immutable record handed to [`crate::WikiClient`] at
//! construction. Every upstream URL is derived from the templates in
//! [`Endpoints`], so tests can point all endpoint families at a local mock
//! server without touching global state.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::WikiError;

/// Placeholder substituted with the per-call language code.
const LANG_PLACEHOLDER: &str = "{lang}";

/// Fixed Action API parameters for the generator search. The search term is
/// appended as `gsrsearch`.
const SEARCH_PARAMS: &str = "action=query&format=json&prop=extracts|pageimages|info\
&generator=search&redirects=1&exchars=250&exlimit=5&exintro=1&explaintext=1\
&inprop=url&gsrlimit=5&gsrwhat=nearmatch";

/// URL templates for the upstream services.
///
/// Any occurrence of `{lang}` is replaced with the language code for the
/// request. Trailing slashes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Base of the REST API (`page/summary`, `page/related`).
    pub rest_base: String,
    /// The Action API script (`api.php`).
    pub action_api: String,
    /// Base of the analytics top-pageviews metric.
    pub pageviews_base: String,
    /// Base path for human-facing article URLs.
    pub article_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            rest_base: "https://{lang}.wikipedia.org/api/rest_v1".into(),
            action_api: "https://{lang}.wikipedia.org/w/api.php".into(),
            pageviews_base: "https://wikimedia.org/api/rest_v1/metrics/pageviews/top".into(),
            article_base: "https://{lang}.wikipedia.org/wiki".into(),
        }
    }
}

impl Endpoints {
    /// Summary URL for an already-sanitized title.
    pub fn summary_url(&self, lang: &str, safe_title: &str) -> String {
        format!(
            "{}/page/summary/{safe_title}?redirect=true",
            expand(&self.rest_base, lang)
        )
    }

    /// Related-pages URL for an already-sanitized title.
    pub fn related_url(&self, lang: &str, safe_title: &str) -> String {
        format!("{}/page/related/{safe_title}", expand(&self.rest_base, lang))
    }

    /// Generator search URL for an already-sanitized term.
    pub fn search_url(&self, lang: &str, safe_term: &str) -> String {
        format!(
            "{}?{SEARCH_PARAMS}&gsrsearch={safe_term}",
            expand(&self.action_api, lang)
        )
    }

    /// Top-pageviews URL for one calendar day of `{lang}.{project}`.
    pub fn pageviews_url(&self, lang: &str, project: &str, date: NaiveDate) -> String {
        format!(
            "{}/{lang}.{project}/all-access/{}/{:02}/{:02}",
            expand(&self.pageviews_base, lang),
            date.year(),
            date.month(),
            date.day()
        )
    }

    /// Article URL for an already-sanitized page identifier.
    pub fn article_url(&self, lang: &str, safe_identifier: &str) -> String {
        format!("{}/{safe_identifier}", expand(&self.article_base, lang))
    }

    fn templates(&self) -> [(&'static str, &str); 4] {
        [
            ("rest_base", &self.rest_base),
            ("action_api", &self.action_api),
            ("pageviews_base", &self.pageviews_base),
            ("article_base", &self.article_base),
        ]
    }
}

fn expand(template: &str, lang: &str) -> String {
    template
        .replace(LANG_PLACEHOLDER, lang)
        .trim_end_matches('/')
        .to_owned()
}

/// Configuration for a [`crate::WikiClient`].
///
/// Use [`Default::default()`] for the production Wikipedia endpoints, or
/// construct with field overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// Language used when the query carries no `lang=` tag.
    pub default_language: String,
    /// Identifying `User-Agent` sent with every request.
    pub user_agent: String,
    /// Per-request timeout in seconds. There are no retries.
    pub timeout_seconds: u64,
    /// Project suffix for the analytics path, as in `en.wikipedia`.
    pub project: String,
    /// Titles callers usually hide from top-pageviews listings.
    pub excluded_pageview_titles: Vec<String>,
    /// Upstream URL templates.
    pub endpoints: Endpoints,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            default_language: "en".into(),
            user_agent: "slack-wikipedia-bot".into(),
            timeout_seconds: 2,
            project: "wikipedia".into(),
            excluded_pageview_titles: vec!["Main Page".into(), "Special:Search".into()],
            endpoints: Endpoints::default(),
        }
    }
}

impl WikiConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `user_agent`, `default_language` and `project` must not be empty
    /// - every endpoint template must expand to an absolute http(s) URL
    pub fn validate(&self) -> Result<(), WikiError> {
        if self.timeout_seconds == 0 {
            return Err(WikiError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(WikiError::Config("user_agent must not be empty".into()));
        }
        if self.default_language.trim().is_empty() {
            return Err(WikiError::Config(
                "default_language must not be empty".into(),
            ));
        }
        if self.project.trim().is_empty() {
            return Err(WikiError::Config("project must not be empty".into()));
        }
        for (name, template) in self.endpoints.templates() {
            let expanded = expand(template, &self.default_language);
            let parsed = Url::parse(&expanded)
                .map_err(|e| WikiError::Config(format!("endpoint {name} is not a URL: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(WikiError::Config(format!(
                    "endpoint {name} must use http or https"
                )));
            }
        }
        Ok(())
    }
}

//! HTTP contract tests for the lookup client.
//!
//! These tests point every endpoint template at a local mock server and
//! verify request format (paths, query parameters, headers) together with
//! the fallback behaviour over real HTTP.

use std::time::Duration;

use chrono::NaiveDate;
use serde_json::json;
use wiki_resolve::{Endpoints, LookupOutcome, WikiClient, WikiConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> WikiConfig {
    let base = server.uri();
    WikiConfig {
        endpoints: Endpoints {
            rest_base: format!("{base}/{{lang}}/rest_v1"),
            action_api: format!("{base}/{{lang}}/w/api.php"),
            pageviews_base: format!("{base}/metrics/pageviews/top"),
            article_base: format!("{base}/{{lang}}/wiki"),
        },
        ..Default::default()
    }
}

fn client_for(server: &MockServer) -> WikiClient {
    WikiClient::new(config_for(server)).expect("valid config")
}

fn summary_body(title: &str) -> serde_json::Value {
    let slug = title.replace(' ', "_");
    json!({
        "type": "standard",
        "title": slug,
        "titles": {"canonical": slug, "normalized": title, "display": title},
        "thumbnail": {"source": format!("https://upload.example/{slug}.jpg"), "width": 200, "height": 240},
        "content_urls": {"desktop": {"page": format!("https://en.wikipedia.org/wiki/{slug}")}},
        "extract": format!("{title} is the subject of this page.")
    })
}

fn related_body(titles: &[&str]) -> serde_json::Value {
    let pages: Vec<_> = titles
        .iter()
        .map(|title| {
            json!({
                "titles": {"normalized": title},
                "extract": format!("About {title}"),
                "content_urls": {"desktop": {"page": format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_"))}}
            })
        })
        .collect();
    json!({ "pages": pages })
}

fn not_found_body() -> serde_json::Value {
    json!({
        "type": "https://mediawiki.org/wiki/HyperSwitch/errors/not_found",
        "title": "Not found.",
        "method": "get",
        "detail": "Page or revision not found."
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Request format
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_requests_carry_identifying_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/rest_v1/page/summary/Rust"))
        .and(query_param("redirect", "true"))
        .and(header("user-agent", "slack-wikipedia-bot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_body("Rust")))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server).fetch_summary("Rust", "en").await;
    assert!(outcome.is_found());
}

#[tokio::test]
async fn test_search_sends_generator_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/de/w/api.php"))
        .and(query_param("action", "query"))
        .and(query_param("format", "json"))
        .and(query_param("prop", "extracts|pageimages|info"))
        .and(query_param("generator", "search"))
        .and(query_param("gsrwhat", "nearmatch"))
        .and(query_param("gsrlimit", "5"))
        .and(query_param("inprop", "url"))
        .and(query_param("gsrsearch", "summer vacation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batchcomplete": "",
            "query": {"pages": {
                "99": {"pageid": 99, "title": "Sommerferien", "index": 1,
                       "extract": "Ferien im Sommer.",
                       "canonicalurl": "https://de.wikipedia.org/wiki/Sommerferien"}
            }}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server).fetch_search("summer vacation", "de").await;
    let article = outcome.first().expect("search hit");
    assert_eq!(article.title, "Sommerferien");
    assert_eq!(article.rank, 1);
}

#[tokio::test]
async fn test_related_path_uses_percent_20() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/rest_v1/page/related/Barack%20Obama"))
        .respond_with(ResponseTemplate::new(200).set_body_json(related_body(&["Joe Biden"])))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server).fetch_related("Barack Obama", "en").await;
    assert_eq!(outcome.first().map(|a| a.title.as_str()), Some("Joe Biden"));
}

// ────────────────────────────────────────────────────────────────────────────
// Response handling
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_upstream_404_payload_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/rest_v1/page/summary/Nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .mount(&server)
        .await;

    let outcome = client_for(&server).fetch_summary("Nope", "en").await;
    assert_eq!(outcome, LookupOutcome::NotFound);
}

#[tokio::test]
async fn test_body_is_decoded_regardless_of_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/rest_v1/page/summary/Rust"))
        .respond_with(ResponseTemplate::new(500).set_body_json(summary_body("Rust")))
        .mount(&server)
        .await;

    let outcome = client_for(&server).fetch_summary("Rust", "en").await;
    assert!(outcome.is_found());
}

#[tokio::test]
async fn test_slow_upstream_times_out_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/rest_v1/page/summary/Slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(summary_body("Slow"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = WikiConfig {
        timeout_seconds: 1,
        ..config_for(&server)
    };
    let client = WikiClient::new(config).expect("valid config");
    assert_eq!(client.fetch_summary("Slow", "en").await, LookupOutcome::NotFound);
}

#[tokio::test]
async fn test_pageviews_lookup_and_detail_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metrics/pageviews/top/en.wikipedia/all-access/2020/06/02"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "project": "en.wikipedia", "access": "all-access",
                "year": "2020", "month": "06", "day": "02",
                "articles": [
                    {"article": "Main_Page", "views": 5863206, "rank": 1},
                    {"article": "George_Floyd", "views": 542220, "rank": 2}
                ]
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/metrics/pageviews/top/en.wikipedia/all-access/2030/01/01"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "title": "Not found.",
            "detail": "The date(s) you used are valid, but we either do not have data for those date(s), or the project you asked for is not loaded yet."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let day = NaiveDate::from_ymd_opt(2020, 6, 2).expect("valid date");
    let outcome = client.fetch_top_pageviews(day, "en").await;
    let items = outcome.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].title, "George Floyd");
    assert_eq!(items[1].url, format!("{}/en/wiki/George_Floyd", server.uri()));
    assert_eq!(items[1].view_count, "542220");

    let filtered = outcome.without_titles(&client.config().excluded_pageview_titles);
    assert_eq!(filtered.len(), 1);

    let future = NaiveDate::from_ymd_opt(2030, 1, 1).expect("valid date");
    assert_eq!(
        client.fetch_top_pageviews(future, "en").await,
        LookupOutcome::NotFound
    );
}

// ────────────────────────────────────────────────────────────────────────────
// End-to-end fallback
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_resolve_obama_summary_hit_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/rest_v1/page/summary/Obama"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_body("Barack Obama")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/en/rest_v1/page/related/Barack%20Obama"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(related_body(&["Michelle Obama", "Presidency of Barack Obama"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/en/w/api.php"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resolution = client_for(&server).resolve_general_term("Obama").await;

    let primary = resolution.primary.items();
    assert_eq!(primary.len(), 1);
    assert_eq!(primary[0].title, "Barack Obama");
    assert_eq!(primary[0].canonical_url, "https://en.wikipedia.org/wiki/Barack_Obama");
    assert_eq!(resolution.related.len(), 2);
    assert_eq!(resolution.related[0].title, "Michelle Obama");
    assert_eq!(resolution.query.language, "en");
    assert_eq!(resolution.query.normalized_term, "Obama");
}

#[tokio::test]
async fn test_resolve_falls_back_to_search_disambiguation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/es/rest_v1/page/summary/Mercurio"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/es/w/api.php"))
        .and(query_param("gsrsearch", "Mercurio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {
                "300": {"title": "Mercurio (planeta)", "index": 2, "canonicalurl": "u2"},
                "100": {"title": "Mercurio (mitología)", "index": 3, "canonicalurl": "u3"},
                "200": {"title": "Mercurio (elemento)", "index": 1, "canonicalurl": "u1"}
            }}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/es/rest_v1/page/related/Mercurio%20%28elemento%29"))
        .respond_with(ResponseTemplate::new(200).set_body_json(related_body(&["Hg"])))
        .expect(0)
        .mount(&server)
        .await;

    let resolution = client_for(&server)
        .resolve_general_term("Mercurio lang=es")
        .await;

    let ranks: Vec<_> = resolution.primary.items().iter().map(|a| a.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    assert!(resolution.related.is_empty());
    assert!(resolution.is_disambiguation());
    assert_eq!(resolution.query.language, "es");
}

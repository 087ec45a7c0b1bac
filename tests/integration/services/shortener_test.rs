//! Link shortener client tests

use wiremock::{
    matchers::{method, query_param},
    Mock, MockServer, ResponseTemplate,
};
use AttractionBuddy::config::ShortenerConfig;
use AttractionBuddy::services::{HttpShortener, LinkShortener};

fn config(server: &MockServer) -> ShortenerConfig {
    ShortenerConfig {
        enabled: true,
        base_url: format!("{}/create.php", server.uri()),
        timeout_seconds: 5,
    }
}

#[tokio::test]
async fn test_shorten_returns_trimmed_link() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("format", "simple"))
        .and(query_param("url", "https://www.louvre.fr/en/visit"))
        .respond_with(ResponseTemplate::new(200).set_body_string("https://is.gd/abc123\n"))
        .mount(&server)
        .await;
    let shortener = HttpShortener::new(config(&server)).unwrap();

    let short = shortener.shorten("https://www.louvre.fr/en/visit").await.unwrap();
    assert_eq!(short, "https://is.gd/abc123");
}

#[tokio::test]
async fn test_shorten_rejects_non_url_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Error: rate limit"))
        .mount(&server)
        .await;
    let shortener = HttpShortener::new(config(&server)).unwrap();

    let error = shortener.shorten("https://www.louvre.fr").await.unwrap_err();
    assert_eq!(error.status_code(), 502);
}

#[tokio::test]
async fn test_shorten_rejects_invalid_input() {
    let server = MockServer::start().await;
    let shortener = HttpShortener::new(config(&server)).unwrap();

    assert!(shortener.shorten("not a link").await.is_err());
}

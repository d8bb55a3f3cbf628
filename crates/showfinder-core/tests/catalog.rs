//! HTTP-level tests for the show catalog against a mock TVMaze server

use serde_json::json;
use showfinder_core::{ClientConfig, MISSING_IMAGE_URL, ShowCatalog, ShowId, ShowfinderError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn catalog_for(server: &MockServer) -> ShowCatalog {
    ShowCatalog::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("catalog should build")
}

#[tokio::test]
async fn test_search_shows_normalizes_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", "batman"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"score": 0.9, "show": {"id": 975, "name": "Batman", "summary": "<p>Bats.</p>",
                "image": {"medium": "http://x/img1.jpg"}}},
            {"score": 0.5, "show": {"id": 481, "name": "Batman Beyond", "summary": null,
                "image": null}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let shows = catalog_for(&server).search_shows("batman").await.unwrap();

    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].id, ShowId(975));
    assert_eq!(shows[0].image, "http://x/img1.jpg");
    assert_eq!(shows[1].id, ShowId(481));
    assert_eq!(shows[1].image, MISSING_IMAGE_URL);
    assert_eq!(shows[1].summary, "");
}

#[tokio::test]
async fn test_search_term_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", " law & order? "))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let shows = catalog_for(&server).search_shows(" law & order? ").await.unwrap();
    assert!(shows.is_empty());
}

#[tokio::test]
async fn test_search_empty_term_is_allowed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let shows = catalog_for(&server).search_shows("").await.unwrap();
    assert!(shows.is_empty());
}

#[tokio::test]
async fn test_get_episodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shows/139/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Pilot", "season": 1, "number": 1},
            {"id": 2, "name": "Vagina Panic", "season": 1, "number": 2}
        ])))
        .mount(&server)
        .await;

    let episodes = catalog_for(&server).get_episodes(ShowId(139)).await.unwrap();

    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0].name, "Pilot");
    assert_eq!(episodes[1].number, 2);
}

#[tokio::test]
async fn test_get_episodes_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shows/999999/episodes"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    match catalog_for(&server).get_episodes(ShowId(999999)).await {
        Err(ShowfinderError::NotFound(url)) => assert!(url.ends_with("/shows/999999/episodes")),
        other => panic!("Expected NotFound error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = catalog_for(&server).search_shows("girls").await;
    assert!(matches!(result, Err(ShowfinderError::RateLimited)));
}

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    match catalog_for(&server).search_shows("girls").await {
        Err(ShowfinderError::UnexpectedStatus { status, .. }) => assert_eq!(status, 503),
        other => panic!("Expected UnexpectedStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = catalog_for(&server).search_shows("girls").await;
    assert!(matches!(result, Err(ShowfinderError::ParseError(_))));
}

#[tokio::test]
async fn test_transport_failure() {
    let catalog = ShowCatalog::with_config(ClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: Some(5),
        ..ClientConfig::default()
    })
    .unwrap();

    let result = catalog.search_shows("girls").await;
    assert!(matches!(result, Err(ShowfinderError::HttpError(_))));
}

#[tokio::test]
async fn test_configured_timeout_aborts_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let catalog = ShowCatalog::with_config(ClientConfig {
        base_url: server.uri(),
        timeout_secs: Some(1),
        ..ClientConfig::default()
    })
    .unwrap();

    match catalog.search_shows("girls").await {
        Err(ShowfinderError::HttpError(e)) => assert!(e.is_timeout()),
        other => panic!("Expected HttpError timeout, got {:?}", other),
    }
}

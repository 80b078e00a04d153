//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: configuration → HTTP client → typed records

use igdb_client::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use igdb_client::models::{Game, Genre, Platform, ReleaseDate, ReleaseDateCategory};
use igdb_client::{ClientConfig, Error, IgdbClient, PaginationLimits};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ClientConfig {
    let mut config = ClientConfig::new("test-key").with_base_url(server.uri());
    config.http.rate_limit = None;
    config.http.max_retries = 0;
    config
}

fn client_for(server: &MockServer) -> IgdbClient {
    IgdbClient::from_config(&config_for(server)).unwrap()
}

fn page(range: std::ops::Range<u64>) -> serde_json::Value {
    json!(range.map(|id| json!({"id": id})).collect::<Vec<_>>())
}

// ============================================================================
// Headers and single records
// ============================================================================

#[tokio::test]
async fn test_every_request_carries_user_key_and_accept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/genres/10"))
        .and(query_param("fields", "*"))
        .and(header("user-key", "test-key"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "name": "Racing", "slug": "racing", "url": "https://www.igdb.com/genres/racing"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let genre: Genre = client.get_by_id(10, "*").await.unwrap().unwrap();

    assert_eq!(genre.id, 10);
    assert_eq!(genre.name.as_deref(), Some("Racing"));
    assert_eq!(genre.slug.as_deref(), Some("racing"));
}

#[tokio::test]
async fn test_release_date_decodes_category_and_timestamp() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/release_dates/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "game": 1942, "platform": 6, "category": 0, "date": 1_431_993_600, "y": 2015, "m": 5}
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let release: ReleaseDate = client.get_by_id(7, "*").await.unwrap().unwrap();

    assert_eq!(release.platform, Some(6));
    assert_eq!(release.category, Some(ReleaseDateCategory::YearMonthDay));
    assert_eq!(
        release.date_utc().map(|d| d.to_rfc3339()),
        Some("2015-05-19T00:00:00+00:00".to_string())
    );
}

#[tokio::test]
async fn test_single_shot_401_yields_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Authentication failed"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let genre: Option<Genre> = client.get_by_id(10, "*").await.unwrap();
    assert!(genre.is_none());

    let games: Vec<Game> = client.search("witcher", "name").await.unwrap();
    assert!(games.is_empty());

    let platforms: Vec<Platform> = client.query([("limit", "10")], "*").await.unwrap();
    assert!(platforms.is_empty());
}

// ============================================================================
// Bulk fetch
// ============================================================================

#[tokio::test]
async fn test_bulk_fetch_follows_count_header() {
    let mock_server = MockServer::start().await;

    for (offset, records) in [(0, page(0..50)), (50, page(50..100)), (100, page(100..120))] {
        let mut response = ResponseTemplate::new(200).set_body_json(records);
        if offset == 0 {
            response = response.insert_header("X-Count", "120");
        }
        Mock::given(method("GET"))
            .and(path("/games/"))
            .and(query_param("fields", "*"))
            .and(query_param("limit", "50"))
            .and(query_param("offset", offset.to_string()))
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    let games: Vec<Game> = client.get_all("*").await.unwrap();

    assert_eq!(games.len(), 120);
    assert_eq!(games.last().map(|g| g.id), Some(119));
}

#[tokio::test]
async fn test_bulk_fetch_without_count_stops_at_offset_ceiling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/platforms/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0..50)))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let platforms: Vec<Platform> = client.get_all("name").await.unwrap();

    assert_eq!(platforms.len(), 200);
}

#[tokio::test]
async fn test_bulk_fetch_second_page_failure_discards_everything() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(0..50))
                .insert_header("X-Count", "120"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/games/"))
        .and(query_param("offset", "50"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_all::<Game>("*").await;

    match result {
        Err(Error::PageFailed {
            endpoint,
            offset,
            source,
        }) => {
            assert_eq!(endpoint, "/games/");
            assert_eq!(offset, 50);
            assert!(matches!(*source, Error::HttpStatus { status: 500, .. }));
        }
        other => panic!("expected PageFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bulk_fetch_honours_configured_tier() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/genres/"))
        .and(query_param("limit", "500"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(0..23))
                .insert_header("X-Count", "23"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = config_for(&mock_server);
    config.pagination = PaginationLimits::new(500, 4500).unwrap();
    let client = IgdbClient::from_config(&config).unwrap();

    let genres: Vec<Genre> = client.get_all("*").await.unwrap();
    assert_eq!(genres.len(), 23);
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_transport_retries_transient_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/genres/10"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/genres/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 10}])))
        .mount(&mock_server)
        .await;

    let transport = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url(mock_server.uri())
            .api_key("test-key")
            .max_retries(2)
            .backoff(
                igdb_client::types::BackoffType::Constant,
                Duration::from_millis(10),
                Duration::from_millis(10),
            )
            .rate_limit(RateLimiterConfig::igdb_v3())
            .build(),
    )
    .unwrap();
    let client = IgdbClient::with_transport(transport);

    let genre: Option<Genre> = client.get_by_id(10, "*").await.unwrap();
    assert_eq!(genre.map(|g| g.id), Some(10));
}

#[tokio::test]
async fn test_from_yaml_config() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pulse_sources/"))
        .and(query_param("search", "kotaku"))
        .and(query_param("limit", "50"))
        .and(header("user-key", "yaml-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": 3, "name": "Kotaku"}])),
        )
        .mount(&mock_server)
        .await;

    let yaml = format!(
        "api_key: yaml-key\nbase_url: \"{}\"\nhttp:\n  rate_limit: null\n",
        mock_server.uri()
    );
    let config = ClientConfig::from_yaml_str(&yaml).unwrap();
    let client = IgdbClient::from_config(&config).unwrap();

    let sources: Vec<igdb_client::models::PulseSource> =
        client.search("kotaku", "name").await.unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].name.as_deref(), Some("Kotaku"));
}

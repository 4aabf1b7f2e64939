//! Integration tests for the reqwest-backed provider client.
//!
//! A local wiremock server stands in for every provider, so these tests run
//! the real HTTP path (headers, timeouts, status handling) without touching
//! the network.

use std::time::Duration;

use ip_lookup::initialization::init_client;
use ip_lookup::{
    Config, FailureKind, HttpProviderClient, ProviderClient, ProviderEndpoints, ProviderError,
    ProviderKind, RecordSource, Resolver,
};
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http_client(config: &Config) -> HttpProviderClient {
    HttpProviderClient::new(init_client(config).expect("Failed to build HTTP client"))
}

fn mock_resolver(server: &MockServer, timeout: Duration) -> Resolver<HttpProviderClient> {
    Resolver::new(http_client(&Config::default()))
        .with_endpoints(ProviderEndpoints::with_base(&server.uri()))
        .with_timeout(timeout)
}

#[tokio::test]
async fn test_client_returns_status_and_body_for_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too many requests"))
        .mount(&server)
        .await;

    let url = Url::parse(&format!("{}/json/", server.uri())).unwrap();
    let response = http_client(&Config::default())
        .fetch(&url, Duration::from_secs(5))
        .await
        .expect("a 429 is still a response");

    assert_eq!(response.status, 429);
    assert_eq!(response.body, "Too many requests");
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_client_sends_user_agent_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ipgeo"))
        .and(header("user-agent", "ip_lookup-test/1.0"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "192.0.2.5" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        user_agent: "ip_lookup-test/1.0".to_string(),
        ..Default::default()
    };
    let url = Url::parse(&format!("{}/ipgeo", server.uri())).unwrap();
    let response = http_client(&config)
        .fetch(&url, Duration::from_secs(5))
        .await
        .expect("request succeeds");

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_client_connection_refused_is_unreachable() {
    // Nothing listens on the discard port
    let url = Url::parse("http://127.0.0.1:9/json").unwrap();

    let error = http_client(&Config::default())
        .fetch(&url, Duration::from_secs(5))
        .await
        .expect_err("nothing is listening");

    assert_eq!(error.kind(), FailureKind::ProviderUnreachable);
}

#[tokio::test]
async fn test_resolver_walks_chain_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "203.0.113.7" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/203.0.113.7/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "203.0.113.7",
            "city": "Amsterdam",
            "region": "North Holland",
            "country_name": "Netherlands",
            "country_code": "NL",
            "postal": "1012",
            "latitude": 52.3676,
            "longitude": 4.9041,
            "timezone": "Europe/Amsterdam",
            "utc_offset": "+0100",
            "org": "Example Hosting B.V.",
            "asn": "AS64500"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolution = mock_resolver(&server, Duration::from_secs(5))
        .resolve(None, false)
        .await;

    assert_eq!(
        resolution.source,
        RecordSource::Enriched {
            via: ProviderKind::Ipify
        }
    );
    assert_eq!(resolution.record.ip, "203.0.113.7");
    assert_eq!(resolution.record.city, "Amsterdam");
    assert_eq!(resolution.record.country_code, "NL");
    assert_eq!(resolution.record.asn, "AS64500");
    assert_eq!(
        resolution.failures[0].error,
        ProviderError::Rejected { status: 500 }
    );
}

#[tokio::test]
async fn test_slow_provider_times_out_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/8.8.8.8/json/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ip": "8.8.8.8", "city": "Too Late" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let timeout = Duration::from_millis(200);
    let resolution = mock_resolver(&server, timeout)
        .resolve(Some("8.8.8.8"), false)
        .await;

    assert!(resolution.is_synthetic());
    assert_eq!(resolution.record.ip, "8.8.8.8");
    assert_ne!(resolution.record.city, "Too Late");
    assert_eq!(resolution.failures[0].error, ProviderError::TimedOut(timeout));
}

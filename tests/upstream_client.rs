//! Tests for the upstream wait-time fetcher in isolation.

mod common;

use common::{attraction_record, test_config};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use waittime_proxy::upstream::{FetchError, WaitTimeClient};

#[tokio::test]
async fn test_fetch_parses_attractions_in_upstream_order() {
    let upstream = MockServer::start().await;
    let records = vec![
        attraction_record("b-ride", 15),
        attraction_record("a-ride", 5),
    ];

    Mock::given(method("GET"))
        .and(path("/parks/some-park/waittime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&records))
        .mount(&upstream)
        .await;

    let client = WaitTimeClient::new(&test_config(&upstream.uri()).upstream).unwrap();
    let attractions = client.fetch_wait_times("some-park").await.unwrap();

    assert_eq!(attractions.len(), 2);
    assert_eq!(attractions[0].id, "b-ride");
    assert_eq!(attractions[0].wait_time, 15);
    assert_eq!(attractions[1].id, "a-ride");
}

#[tokio::test]
async fn test_fetch_preserves_opaque_return_end() {
    let upstream = MockServer::start().await;
    let mut record = attraction_record("vq-ride", 0);
    record["meta"]["returnTime"]["returnEnd"] = json!({"hour": 14, "minute": 30});

    Mock::given(method("GET"))
        .and(path("/parks/vq-park/waittime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([record])))
        .mount(&upstream)
        .await;

    let client = WaitTimeClient::new(&test_config(&upstream.uri()).upstream).unwrap();
    let attractions = client.fetch_wait_times("vq-park").await.unwrap();

    assert_eq!(
        attractions[0].meta.return_time.return_end,
        json!({"hour": 14, "minute": 30})
    );
    // Byte-for-byte on reserialization: the full record must round-trip.
    assert_eq!(serde_json::to_value(&attractions[0]).unwrap(), record);
}

#[tokio::test]
async fn test_fetch_non_200_includes_status_and_body() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/parks/closed/waittime"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .mount(&upstream)
        .await;

    let client = WaitTimeClient::new(&test_config(&upstream.uri()).upstream).unwrap();
    let err = client.fetch_wait_times("closed").await.unwrap_err();

    match &err {
        FetchError::Status { status, body } => {
            assert_eq!(*status, 503);
            assert_eq!(body, "service unavailable");
        }
        other => panic!("expected status error, got: {other}"),
    }
}

#[tokio::test]
async fn test_fetch_connection_refused_is_request_error() {
    // Nothing listens on this port.
    let client = WaitTimeClient::new(&test_config("http://127.0.0.1:9").upstream).unwrap();
    let err = client.fetch_wait_times("any-park").await.unwrap_err();

    assert!(matches!(err, FetchError::Request(_)));
    assert!(err.to_string().starts_with("failed to issue wait time GET"));
}

#[tokio::test]
async fn test_fetch_timeout_is_classified() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/parks/slow/waittime"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&upstream)
        .await;

    let mut config = test_config(&upstream.uri());
    config.upstream.request_timeout_secs = 1;
    let client = WaitTimeClient::new(&config.upstream).unwrap();

    let err = client.fetch_wait_times("slow").await.unwrap_err();
    assert!(err.is_timeout());
}

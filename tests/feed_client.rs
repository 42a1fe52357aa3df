//! Buyers feed client against a mock feed.

mod common;

use advent_nft::config::FeedConfig;
use advent_nft::feed::{Amount, FeedClient, FeedError, FeedState};
use common::mock_feed::{MockFeed, MockResponse};

fn feed_config(url: &str, timeout_ms: u64) -> FeedConfig {
    FeedConfig {
        url: url.to_string(),
        timeout_ms,
        connect_timeout_ms: 200,
    }
}

#[tokio::test]
async fn test_two_rows_in_feed_order() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"name":"A","amount":3},{"name":"B","amount":1}]"#,
    ))
    .await;

    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    let state = client.snapshot().await;

    assert!(state.is_resolved());
    let rows = state.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "A");
    assert_eq!(rows[0].amount, Amount::from(3));
    assert_eq!(rows[1].name, "B");
    assert_eq!(rows[1].amount, Amount::from(1));
}

#[tokio::test]
async fn test_no_client_side_sort() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"name":"low","amount":1},{"name":"high","amount":9},{"name":"mid","amount":5}]"#,
    ))
    .await;

    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    let names: Vec<String> = client
        .fetch()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();

    assert_eq!(names, ["low", "high", "mid"]);
}

#[tokio::test]
async fn test_empty_array_resolves_empty() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::json("[]")).await;

    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    let state = client.snapshot().await;

    assert_eq!(state, FeedState::Resolved(Vec::new()));
    assert!(state.rows().is_empty());
}

#[tokio::test]
async fn test_single_get_with_json_accept() {
    let mock = MockFeed::start().await;
    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    let _ = client.snapshot().await;

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/buyers");
    assert!(requests[0]
        .headers
        .iter()
        .any(|(k, v)| k == "accept" && v == "application/json"));
}

#[tokio::test]
async fn test_server_error_degrades_to_pending() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::error(500)).await;

    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    assert!(matches!(
        client.fetch().await,
        Err(FeedError::Status { status: 500 })
    ));

    mock.enqueue_response(MockResponse::error(503)).await;
    let state = client.snapshot().await;
    assert_eq!(state, FeedState::Pending);
    assert!(state.rows().is_empty());

    // No retry: one request per call.
    assert_eq!(mock.captured_requests().await.len(), 2);
}

#[tokio::test]
async fn test_malformed_body_degrades_to_pending() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"buyers": []}"#)).await;

    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    assert!(matches!(client.fetch().await, Err(FeedError::Decode(_))));

    mock.enqueue_response(MockResponse::json("not json")).await;
    assert_eq!(client.snapshot().await, FeedState::Pending);
}

#[tokio::test]
async fn test_slow_feed_degrades_to_pending() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::json(r#"[{"name":"late","amount":1}]"#).with_delay(500))
        .await;

    let client = FeedClient::new(&feed_config(&mock.url(), 100)).unwrap();
    let started = std::time::Instant::now();
    let state = client.snapshot().await;

    assert_eq!(state, FeedState::Pending);
    assert!(started.elapsed() < std::time::Duration::from_millis(450));
}

#[tokio::test]
async fn test_unreachable_feed_degrades_to_pending() {
    let url = format!("http://127.0.0.1:{}/api/buyers", common::free_port());
    let client = FeedClient::new(&feed_config(&url, 1000)).unwrap();

    assert!(matches!(client.fetch().await, Err(FeedError::Request { .. })));
    assert_eq!(client.snapshot().await, FeedState::Pending);
}

#[tokio::test]
async fn test_extra_fields_tolerated() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"name":"A","amount":"0.34","wallet":"0xabc","tokens":[3,7]}]"#,
    ))
    .await;

    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    let buyers = client.fetch().await.unwrap();

    assert_eq!(buyers.len(), 1);
    assert_eq!(buyers[0].amount.to_string(), "0.34");
    assert_eq!(buyers[0].extra["wallet"], "0xabc");
}

#[tokio::test]
async fn test_name_and_address_together() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"name":"A","address":"0x1","amount":3},{"name":"B","address":"0x2","amount":1}]"#,
    ))
    .await;

    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    let state = client.snapshot().await;

    let rows = state.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "A");
    assert_eq!(rows[0].extra["address"], "0x1");
    assert_eq!(rows[1].name, "B");
}

#[tokio::test]
async fn test_amount_and_total_together() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"name":"A","amount":3,"total":"3 ETH"}]"#,
    ))
    .await;

    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    let buyers = client.fetch().await.unwrap();

    assert_eq!(buyers.len(), 1);
    assert_eq!(buyers[0].amount.to_string(), "3");
}

#[tokio::test]
async fn test_null_amount_keeps_row() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"name":"A","amount":3},{"name":"B","amount":null}]"#,
    ))
    .await;

    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    let state = client.snapshot().await;

    let rows = state.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].name, "B");
    assert_eq!(rows[1].amount, Amount::Missing);
}

#[tokio::test]
async fn test_bad_records_skipped_not_fatal() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"name":"A","amount":3},{"amount":2},"junk",null,{"address":"0xB","total":1}]"#,
    ))
    .await;

    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    let state = client.snapshot().await;

    assert!(state.is_resolved());
    let names: Vec<&str> = state.rows().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["A", "0xB"]);
}

#[tokio::test]
async fn test_wei_amount_shown_as_sent() {
    let mock = MockFeed::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"name":"A","amount":10000000000000000001},{"name":"B","amount":1.50}]"#,
    ))
    .await;

    let client = FeedClient::new(&feed_config(&mock.url(), 1000)).unwrap();
    let buyers = client.fetch().await.unwrap();

    assert_eq!(buyers[0].amount.to_string(), "10000000000000000001");
    assert_eq!(buyers[1].amount.to_string(), "1.50");
}

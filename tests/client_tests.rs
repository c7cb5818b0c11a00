//! Integration tests for the HTTP client.
//!
//! These tests verify header injection, base-URI override, error mapping
//! for non-2xx responses, and the retry policy for throttled requests.

use reddit_api::clients::SDK_VERSION;
use reddit_api::{ApiHost, HttpError, RedditClient, RedditConfig, UserAgent};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn base_builder(server: &MockServer) -> reddit_api::RedditConfigBuilder {
    RedditConfig::builder()
        .user_agent(UserAgent::new("test-suite/0.1").unwrap())
        .api_host(ApiHost::new(server.uri()).unwrap())
}

// ============================================================================
// Headers and Base URI
// ============================================================================

#[tokio::test]
async fn test_requests_carry_default_headers() {
    let server = MockServer::start().await;

    // The User-Agent leads with the configured value and appends the SDK
    // identification.
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    let expected_user_agent =
        format!("test-suite/0.1 reddit-api-rust/{SDK_VERSION} (Rust {rust_version})");

    Mock::given(method("GET"))
        .and(path("/r/rust/hot"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", expected_user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let config = base_builder(&server)
        .access_token("test-token")
        .build()
        .unwrap();
    let client = RedditClient::new(&config);

    let body = client.get_json("/r/rust/hot", &[]).await.unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_path_without_leading_slash_is_joined() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subreddits/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = base_builder(&server).build().unwrap();
    let client = RedditClient::new(&config);

    client.get_json("subreddits/popular", &[]).await.unwrap();
}

// ============================================================================
// Error Mapping
// ============================================================================

#[tokio::test]
async fn test_non_2xx_maps_to_response_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/r/private/hot"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"message": "Forbidden", "error": 403}))
                .insert_header("x-ratelimit-used", "10")
                .insert_header("x-ratelimit-remaining", "590.0")
                .insert_header("x-ratelimit-reset", "300"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = base_builder(&server).build().unwrap();
    let client = RedditClient::new(&config);

    let result = client.get_json("/r/private/hot", &[]).await;
    match result {
        Err(HttpError::Response(err)) => {
            assert_eq!(err.code, 403);
            assert!(err.message.contains("Forbidden"));
            assert!((err.ratelimit_remaining.unwrap() - 590.0).abs() < f64::EPSILON);
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retryable_status_fails_immediately_with_single_try() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hot"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": 500})))
        .expect(1)
        .mount(&server)
        .await;

    // tries defaults to 1: no retry even for a retryable status.
    let config = base_builder(&server).build().unwrap();
    let client = RedditClient::new(&config);

    let result = client.get_json("/hot", &[]).await;
    assert!(matches!(result, Err(HttpError::Response(err)) if err.code == 500));
}

// ============================================================================
// Retry Policy
// ============================================================================

#[tokio::test]
async fn test_throttled_request_retries_and_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hot"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"error": 429}))
                .insert_header("retry-after", "0"),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let config = base_builder(&server).tries(3).build().unwrap();
    let client = RedditClient::new(&config);

    let body = client.get_json("/hot", &[]).await.unwrap();
    assert_eq!(body["ok"], true);

    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_exhausted_retry_budget_yields_max_retries_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hot"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"error": 429}))
                .insert_header("retry-after", "0"),
        )
        .expect(2)
        .mount(&server)
        .await;

    let config = base_builder(&server).tries(2).build().unwrap();
    let client = RedditClient::new(&config);

    let result = client.get_json("/hot", &[]).await;
    match result {
        Err(HttpError::MaxRetries(err)) => {
            assert_eq!(err.code, 429);
            assert_eq!(err.tries, 2);
        }
        other => panic!("expected retry exhaustion, got {other:?}"),
    }
}

// ============================================================================
// Rate-Limit Bookkeeping
// ============================================================================

#[tokio::test]
async fn test_rate_limit_headers_are_parsed_from_successful_responses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hot"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true}))
                .insert_header("x-ratelimit-used", "3")
                .insert_header("x-ratelimit-remaining", "597.0")
                .insert_header("x-ratelimit-reset", "240"),
        )
        .mount(&server)
        .await;

    let config = base_builder(&server).build().unwrap();
    let client = RedditClient::new(&config);

    let response = client.get("/hot", &[]).await.unwrap();
    assert!(response.is_ok());

    let limit = response.rate_limit.unwrap();
    assert!((limit.used - 3.0).abs() < f64::EPSILON);
    assert!((limit.remaining - 597.0).abs() < f64::EPSILON);
    assert_eq!(limit.reset_seconds, 240);
}

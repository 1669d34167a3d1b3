//! Integration tests for the REST API client.
//!
//! These tests run the client against a local mock server and verify
//! request construction, response classification and rate limit tracking.

use serde_json::json;
use tradegecko_api::clients::{HttpError, RestError};
use tradegecko_api::{
    ApiToken, BaseUrl, Outcome, QueryOptions, RateLimitState, RestClient, TradeGeckoConfig,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_client(server: &MockServer, token: &str) -> RestClient {
    let config = TradeGeckoConfig::builder()
        .api_token(ApiToken::new(token).unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

fn rate_limited(template: ResponseTemplate) -> ResponseTemplate {
    template
        .insert_header("X-Rate-Limit-Limit", "300")
        .insert_header("X-Rate-Limit-Remaining", "299")
        .insert_header("X-Rate-Limit-Reset", "60")
        .insert_header("X-Request-Id", "req-abc")
}

// ============================================================================
// Success Paths
// ============================================================================

#[tokio::test]
async fn test_list_products_returns_payload_and_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("limit", "10"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(rate_limited(
            ResponseTemplate::new(200).set_body_json(json!({"products": []})),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let outcome = client
        .list("products", Some(&QueryOptions::new().limit(10)))
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Payload(json!({"products": []})));
    assert_eq!(
        client.rate_limit(),
        RateLimitState {
            limit: Some(300),
            remaining: Some(299),
            reset_seconds: Some(60),
            request_id: Some("req-abc".to_string()),
        }
    );
}

#[tokio::test]
async fn test_list_without_options_sends_no_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    client.list("orders", None).await.unwrap();
    client
        .list("orders", Some(&QueryOptions::new()))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert_eq!(request.url.query(), None);
    }
}

#[tokio::test]
async fn test_list_encodes_ids_once_with_commas() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"variants": []})))
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let options = QueryOptions::new()
        .ids([1, 2, 3])
        .page(2)
        .param("status", "active");
    client.list("variants", Some(&options)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("ids=1,2,3&page=2&status=active")
    );
}

#[tokio::test]
async fn test_get_by_id_appends_id_and_options() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/42"))
        .and(query_param("include", "variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"product": {"id": 42}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let outcome = client
        .get_by_id("products", 42, Some(&QueryOptions::new().include("variants")))
        .await
        .unwrap();

    assert_eq!(outcome.payload(), Some(&json!({"product": {"id": 42}})));
}

#[tokio::test]
async fn test_create_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/companies"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"company": {"name": "Acme"}})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"company": {"id": 7, "name": "Acme"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let outcome = client
        .create("companies", json!({"company": {"name": "Acme"}}), None)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Payload(json!({"company": {"id": 7, "name": "Acme"}}))
    );
}

#[tokio::test]
async fn test_update_puts_to_member_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/products/9"))
        .and(body_json(json!({"product": {"name": "Renamed"}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let outcome = client
        .update("products", 9, json!({"product": {"name": "Renamed"}}), None)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::NoContent);
}

#[tokio::test]
async fn test_remove_returns_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/addresses/5"))
        .respond_with(rate_limited(ResponseTemplate::new(204)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let outcome = client.remove("addresses", 5, None).await.unwrap();

    assert_eq!(outcome, Outcome::NoContent);
    assert_ne!(outcome, Outcome::Payload(serde_json::Value::Null));
    assert_eq!(client.rate_limit().remaining, Some(299));
}

// ============================================================================
// Not Found and Error Paths
// ============================================================================

#[tokio::test]
async fn test_get_by_id_not_found_returns_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/abc123"))
        .respond_with(rate_limited(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})),
        ))
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let outcome = client.get_by_id("orders", "abc123", None).await.unwrap();

    assert_eq!(outcome, Outcome::NotFound);
    assert_eq!(client.rate_limit().request_id.as_deref(), Some("req-abc"));
}

#[tokio::test]
async fn test_create_unauthorized_returns_authorization_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(rate_limited(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid access token"})),
        ))
        .mount(&server)
        .await;

    let client = create_client(&server, "bad-token");
    let error = client
        .create("contacts", json!({"name": "Acme"}), None)
        .await
        .unwrap_err();

    match error {
        RestError::Http(HttpError::Authorization(e)) => {
            assert_eq!(e.code, 401);
            assert_eq!(e.message, "Invalid access token");
            assert_eq!(e.request_id.as_deref(), Some("req-abc"));
        }
        other => panic!("Expected Authorization error, got {other:?}"),
    }
    // Error responses update the rate limit state too.
    assert_eq!(client.rate_limit().limit, Some(300));
}

#[tokio::test]
async fn test_bad_request_returns_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "limit is too large"})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let error = client
        .list("products", Some(&QueryOptions::new().limit(10_000)))
        .await
        .unwrap_err();

    assert!(matches!(error, RestError::Http(HttpError::Request(ref e)) if e.message == "limit is too large"));
    assert_eq!(error.status(), Some(400));
}

#[tokio::test]
async fn test_rate_limit_exceeded_carries_reset() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("X-Rate-Limit-Limit", "300")
                .insert_header("X-Rate-Limit-Remaining", "0")
                .insert_header("X-Rate-Limit-Reset", "42")
                .set_body_json(json!({"message": "Too Many Requests"})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let error = client.list("products", None).await.unwrap_err();

    match error {
        RestError::Http(HttpError::RateLimitExceeded(e)) => {
            assert_eq!(e.reset_seconds, Some(42));
        }
        other => panic!("Expected RateLimitExceeded, got {other:?}"),
    }
    assert!(client.rate_limit().is_exhausted());
    assert_eq!(client.rate_limit().reset_seconds, Some(42));
}

#[tokio::test]
async fn test_unprocessable_entity_is_unhandled_client_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/products/1"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"name": ["can't be blank"]}})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let error = client
        .update("products", 1, json!({"product": {"name": ""}}), None)
        .await
        .unwrap_err();

    match error {
        RestError::Http(HttpError::UnhandledClient(e)) => {
            assert_eq!(e.code, 422);
            assert!(e.message.contains("can't be blank"));
        }
        other => panic!("Expected UnhandledClient, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_carries_raw_body() {
    let server = MockServer::start().await;
    let raw = "<html><h1>502 Bad Gateway</h1></html>";

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(502).set_body_string(raw))
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let error = client.list("orders", None).await.unwrap_err();

    assert!(matches!(error, RestError::Http(HttpError::Server(ref e)) if e.body == raw));
    assert!(error.to_string().contains(raw));
}

#[tokio::test]
async fn test_redirects_are_not_followed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", "/new")
                .set_body_json(json!({"moved": true})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let outcome = client.list("old", None).await.unwrap();

    assert_eq!(outcome, Outcome::Payload(json!({"moved": true})));
}

// ============================================================================
// Argument Validation and Isolation
// ============================================================================

#[tokio::test]
async fn test_invalid_arguments_fail_before_sending() {
    let server = MockServer::start().await;
    let client = create_client(&server, "test-token");

    assert!(matches!(
        client.list("", None).await,
        Err(RestError::InvalidPath { .. })
    ));
    assert!(matches!(
        client.remove("orders", "", None).await,
        Err(RestError::InvalidId)
    ));
    assert!(matches!(
        client.get_by_id("products#x", 5, None).await,
        Err(RestError::InvalidPath { .. })
    ));
    assert!(matches!(
        client
            .list("products?x=1", Some(&QueryOptions::new().limit(10)))
            .await,
        Err(RestError::InvalidPath { .. })
    ));
    assert!(matches!(
        client.create("sales orders", json!({"order": {}}), None).await,
        Err(RestError::InvalidPath { .. })
    ));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_clients_keep_independent_rate_limit_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("Authorization", "Bearer token-one"))
        .respond_with(rate_limited(
            ResponseTemplate::new(200).set_body_json(json!({"products": []})),
        ))
        .mount(&server)
        .await;

    let client_one = create_client(&server, "token-one");
    let client_two = create_client(&server, "token-two");

    client_one.list("products", None).await.unwrap();

    assert_eq!(client_one.rate_limit().remaining, Some(299));
    assert_eq!(client_two.rate_limit(), RateLimitState::default());
}

//! Integration tests for the HTTP client.
//!
//! These tests verify default headers on the wire, response parsing for both
//! body types, status passthrough and the opt-in retry behavior.

use pg_restful::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError,
};
use pg_restful::{AccessToken, HostUrl, PgConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = PgConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .access_token(AccessToken::new("secret-token").unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config)
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .and(header("Authorization", "Bearer secret-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "/ping").build().unwrap();
    let response = client_for(&server).request(request).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!({"ok": true}));
}

#[tokio::test]
async fn test_json_body_is_sent_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/users"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "Ada"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Post, "/users")
        .body(json!({"name": "Ada"}))
        .body_type(DataType::Json)
        .build()
        .unwrap();
    let response = client_for(&server).request(request).await.unwrap();

    assert_eq!(response.code, 201);
    assert_eq!(response.body["id"], 1);
}

#[tokio::test]
async fn test_text_response_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("removed"))
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Delete, "/users/1")
        .response_type(DataType::Text)
        .build()
        .unwrap();
    let response = client_for(&server).request(request).await.unwrap();

    assert_eq!(response.text, "removed");
    assert!(response.body.is_null());
}

#[tokio::test]
async fn test_extra_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Authorization", "Bearer other"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "/me")
        .header("Authorization", "Bearer other")
        .build()
        .unwrap();

    assert!(client_for(&server).request(request).await.is_ok());
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = HttpRequest {
        http_method: HttpMethod::Put,
        path: "/users/1".to_string(),
        body: None,
        body_type: None,
        response_type: DataType::Json,
        extra_headers: None,
        tries: 1,
    };
    let result = client_for(&server).request(request).await;

    assert!(matches!(
        result,
        Err(HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody { .. }))
    ));
}

// ============================================================================
// Errors and Retries
// ============================================================================

#[tokio::test]
async fn test_unauthorized_is_returned_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthenticated."))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "/users").build().unwrap();
    let error = client_for(&server).request(request).await.unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert_eq!(error.to_string(), "HTTP 401: Unauthenticated.");
}

#[tokio::test]
async fn test_server_error_is_not_retried_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "/users").build().unwrap();
    let error = client_for(&server).request(request).await.unwrap_err();

    assert!(matches!(error, HttpError::Response(ref e) if e.code == 500));
}

#[tokio::test]
async fn test_opt_in_retry_recovers_from_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "/users")
        .tries(2)
        .build()
        .unwrap();
    let response = client_for(&server).request(request).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_unusable_retry_after_falls_back_to_fixed_delay() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "-1"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "/users")
        .tries(2)
        .build()
        .unwrap();
    let response = client_for(&server).request(request).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_retries_exhausted_reports_last_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_string("slow down"),
        )
        .expect(3)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "/users")
        .tries(3)
        .build()
        .unwrap();
    let error = client_for(&server).request(request).await.unwrap_err();

    match error {
        HttpError::MaxRetries(e) => {
            assert_eq!(e.code, 429);
            assert_eq!(e.tries, 3);
            assert_eq!(e.message, "slow down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

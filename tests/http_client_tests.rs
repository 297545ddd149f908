//! Integration tests for the request/response pipeline.
//!
//! These tests run the default reqwest transport against a local mock
//! server and verify credential injection, header handling, status
//! classification and envelope decoding end to end.

use instagram_api::clients::{HttpMethod, FORM_CONTENT_TYPE};
use instagram_api::{
    AccessToken, ApiResponse, BaseUrl, ClientConfig, ClientId, ClientSecret, HttpClient,
    HttpError, ParseError,
};
use serde::Deserialize;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Item {
    id: String,
}

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .build()
        .unwrap()
}

// ============================================================================
// Request Building
// ============================================================================

#[tokio::test]
async fn test_access_token_is_sent_as_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/self"))
        .and(query_param("access_token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{"id":"1"}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server));
    let request = client.build_request(HttpMethod::Get, "users/self", "").unwrap();
    let response: ApiResponse<Item> = client.execute(&request).await.unwrap();

    assert_eq!(response.id, "1");
}

#[tokio::test]
async fn test_all_credentials_and_user_agent_are_sent() {
    let server = MockServer::start().await;
    let config = ClientConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .client_id(ClientId::new("my-id").unwrap())
        .client_secret(ClientSecret::new("my-secret").unwrap())
        .user_agent_prefix("IntegrationTest/1.0")
        .build()
        .unwrap();
    let client = HttpClient::new(config);

    Mock::given(method("GET"))
        .and(path("/media/popular"))
        .and(query_param("client_id", "my-id"))
        .and(query_param("client_secret", "my-secret"))
        .and(header("User-Agent", client.user_agent()))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let request = client.build_request(HttpMethod::Get, "media/popular", "").unwrap();
    let response: ApiResponse<Vec<Item>> = client.execute(&request).await.unwrap();

    assert!(response.is_empty());
    assert!(client.user_agent().starts_with("IntegrationTest/1.0 | "));
}

#[tokio::test]
async fn test_explicit_access_token_is_not_overwritten() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/self"))
        .and(query_param("access_token", "explicit"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{"id":"2"}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server));
    let request = client
        .build_request(HttpMethod::Get, "users/self?access_token=explicit", "")
        .unwrap();
    let response: ApiResponse<Item> = client.execute(&request).await.unwrap();

    assert_eq!(response.id, "2");
}

#[tokio::test]
async fn test_mutating_request_sends_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/42/relationship"))
        .and(header("Content-Type", FORM_CONTENT_TYPE))
        .and(body_string("action=follow"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"meta":{"code":200}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server));
    let request = client
        .build_request(HttpMethod::Post, "users/42/relationship", "action=follow")
        .unwrap();

    client.execute_without_body(&request).await.unwrap();
}

// ============================================================================
// Response Classification
// ============================================================================

#[tokio::test]
async fn test_oauth_exception_is_returned_as_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/self"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"meta":{"error_type":"OAuthException","code":400,"error_message":"The access_token provided is invalid."}}"#,
        ))
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server));
    let request = client.build_request(HttpMethod::Get, "users/self", "").unwrap();
    let error = client.execute::<Item>(&request).await.unwrap_err();

    let status = error.as_status().expect("expected a status error");
    assert_eq!(status.status, 400);
    assert_eq!(status.error_type(), "OAuthException");
    assert_eq!(status.error_message(), "The access_token provided is invalid.");
    assert!(!error.to_string().contains("test-token"));
}

#[tokio::test]
async fn test_plain_text_500_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/media/popular"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Oops, an error occurred."))
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server));
    let request = client.build_request(HttpMethod::Get, "media/popular", "").unwrap();
    let error = client.execute::<Vec<Item>>(&request).await.unwrap_err();

    let status = error.as_status().unwrap();
    assert_eq!(status.error_type(), "Internal Server Error");
    assert_eq!(status.code(), 500);
    assert_eq!(status.error_message(), "Oops, an error occurred.");
}

#[tokio::test]
async fn test_not_found_with_html_body_has_empty_meta() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server));
    let request = client.build_request(HttpMethod::Get, "nothing/here", "").unwrap();
    let error = client.execute::<Item>(&request).await.unwrap_err();

    let status = error.as_status().unwrap();
    assert_eq!(status.status, 404);
    assert_eq!(status.error_type(), "");
    assert_eq!(status.code(), 0);
}

#[tokio::test]
async fn test_invalid_success_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server));
    let request = client.build_request(HttpMethod::Get, "media/1", "").unwrap();
    let result = client.execute::<Item>(&request).await;

    assert!(matches!(result, Err(HttpError::Parse(ParseError::Envelope(_)))));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let server = MockServer::builder().start().await;
    let config = config_for(&server);
    drop(server);

    let client = HttpClient::new(config);
    let request = client.build_request(HttpMethod::Get, "users/self", "").unwrap();
    let result = client.execute::<Item>(&request).await;

    assert!(matches!(result, Err(HttpError::Transport(_))));
}

// ============================================================================
// Rate Limits and Pagination
// ============================================================================

#[tokio::test]
async fn test_rate_limit_headers_are_exposed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Ratelimit-Limit", "5000")
                .insert_header("X-Ratelimit-Remaining", "4321")
                .set_body_string(r#"{"data":[]}"#),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server));
    let request = client.build_request(HttpMethod::Get, "media/popular", "").unwrap();
    let response: ApiResponse<Vec<Item>> = client.execute(&request).await.unwrap();

    let limit = response.rate_limit().unwrap();
    assert_eq!(limit.limit, 5000);
    assert_eq!(limit.remaining, 4321);
}

#[tokio::test]
async fn test_missing_rate_limit_headers_are_parse_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server));
    let request = client.build_request(HttpMethod::Get, "media/popular", "").unwrap();
    let response: ApiResponse<Vec<Item>> = client.execute(&request).await.unwrap();

    assert!(matches!(
        response.rate_limit(),
        Err(ParseError::RateLimitHeader { .. })
    ));
}

#[tokio::test]
async fn test_next_page_follows_absolute_url() {
    let server = MockServer::start().await;
    let next_url = format!("{}/tags/sun/media/recent?max_tag_id=99", server.uri());

    Mock::given(method("GET"))
        .and(path("/tags/sun/media/recent"))
        .and(query_param("max_tag_id", "99"))
        .and(query_param("access_token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[{"id":"2"}]}"#))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tags/sun/media/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"{{"data":[{{"id":"1"}}],"pagination":{{"next_url":"{next_url}","next_max_id":"99"}}}}"#
        )))
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server));
    let request = client
        .build_request(HttpMethod::Get, "tags/sun/media/recent", "")
        .unwrap();
    let first: ApiResponse<Vec<Item>> = client.execute(&request).await.unwrap();
    assert_eq!(first.next_max_id(), "99");

    let second = client
        .next_page::<Vec<Item>, _>(&first)
        .await
        .unwrap()
        .expect("expected a second page");
    assert_eq!(second[0].id, "2");
    assert!(!second.has_next_page());

    let third = client.next_page::<Vec<Item>, _>(&second).await.unwrap();
    assert!(third.is_none());
}

//! Tests for the auth module

use super::*;
use crate::config::ConnectorConfig;
use crate::error::Error;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &wiremock::MockServer) -> ConnectorConfig {
    ConnectorConfig::new(server.uri(), "ci-token", "ci-secret").unwrap()
}

#[tokio::test]
async fn test_sign_in_returns_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.9/auth/signin"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credentials": {
                "site": { "id": "abc", "contentUrl": "" },
                "user": { "id": "u1" },
                "token": "session-token-123"
            }
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(config_for(&mock_server));
    let token = auth.sign_in().await.unwrap();
    assert_eq!(token.as_str(), "session-token-123");
}

#[tokio::test]
async fn test_sign_in_sends_pat_credentials_and_default_site() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.9/auth/signin"))
        .and(body_string_contains("personalAccessTokenName"))
        .and(body_string_contains("ci-token"))
        .and(body_string_contains("personalAccessTokenSecret"))
        .and(body_string_contains("ci-secret"))
        .and(body_string_contains("\"contentUrl\":\"\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credentials": { "token": "tok" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(config_for(&mock_server));
    auth.sign_in().await.unwrap();
}

#[tokio::test]
async fn test_sign_in_non_2xx_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.9/auth/signin"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "summary": "Sign in failed", "code": "401001" }
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(config_for(&mock_server));
    let err = auth.sign_in().await.unwrap_err();
    assert!(matches!(err, Error::Auth { .. }));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_sign_in_missing_token_path_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.9/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credentials": { "site": { "id": "abc" } }
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(config_for(&mock_server));
    let err = auth.sign_in().await.unwrap_err();
    assert!(matches!(err, Error::Auth { .. }));
    assert!(err.to_string().contains("credentials.token"));
}

#[tokio::test]
async fn test_sign_in_malformed_body_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.9/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(config_for(&mock_server));
    let err = auth.sign_in().await.unwrap_err();
    assert!(matches!(err, Error::Auth { .. }));
}

#[tokio::test]
async fn test_sign_in_fresh_login_every_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.9/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credentials": { "token": "tok" }
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    // No caching: each call hits the endpoint again.
    let auth = Authenticator::new(config_for(&mock_server));
    auth.sign_in().await.unwrap();
    auth.sign_in().await.unwrap();
}

#[test]
fn test_session_token_debug_redacted() {
    let token = SessionToken::new("very-secret-token");
    let debug = format!("{token:?}");
    assert!(!debug.contains("very-secret-token"));
}

//! # Request Gateway Integration Tests
//!
//! Exercises the full request pipeline against a mock backend: envelope
//! unwrapping, failure classification, and the session-invalidation side
//! effect, over a real HTTP transport.

use std::sync::Arc;

use lms_client::{
    ClientConfig, ClientError, MemorySessionStore, RequestGateway, RequestOptions, SessionStore,
};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct UserId {
    id: String,
}

fn gateway_for(server: &MockServer, store: Arc<MemorySessionStore>) -> RequestGateway {
    RequestGateway::new(&ClientConfig::new(server.uri()), store).unwrap()
}

/// A success envelope resolves to exactly the `result` payload
#[tokio::test]
async fn test_success_envelope_returns_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "code": 1000,
                "result": {"id": "u1"}
            })),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let gateway = gateway_for(&server, store.clone());

    let user: UserId = gateway.get("/users/me").await.unwrap();
    assert_eq!(user, UserId { id: "u1".to_string() });

    // A successful call must never touch the session
    assert!(store.navigations().is_empty());
}

/// The JSON content type default is sent and caller headers override it
#[tokio::test]
async fn test_default_and_overridden_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags"))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 1000, "result": []})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/import"))
        .and(header("content-type", "text/csv"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 1000, "result": null})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Arc::new(MemorySessionStore::new()));

    let _: Vec<serde_json::Value> = gateway.get("/tags").await.unwrap();

    let options = RequestOptions::new(Method::POST).header("Content-Type", "text/csv");
    let _: () = gateway.request("/import", options).await.unwrap();
}

/// The caller's pre-serialized body goes out unmodified
#[tokio::test]
async fn test_body_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "pw"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "code": 1000,
                "result": {"id": "u1"}
            })),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Arc::new(MemorySessionStore::new()));
    let options = RequestOptions {
        method: Method::POST,
        headers: Vec::new(),
        body: Some(r#"{"email":"ada@example.com","password":"pw"}"#.to_string()),
    };
    let user: UserId = gateway.request("/auth/login", options).await.unwrap();
    assert_eq!(user.id, "u1");
}

/// 403 with an unparseable body fails as a transport error and invalidates
#[tokio::test]
async fn test_forbidden_unparseable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<html>forbidden</html>"))
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::at_path("/admin/users"));
    store.set_token("bearer-abc").await;
    let gateway = gateway_for(&server, store.clone());

    let err = gateway.get::<UserId>("/admin/users").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { status: 403 }));

    assert!(store.token().await.is_none());
    assert_eq!(store.navigations(), vec!["/login".to_string()]);
}

/// 401 invalidates exactly once regardless of body content
#[tokio::test]
async fn test_unauthorized_invalidates_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile/settings"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({
                "code": 9001,
                "message": "token expired"
            })),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::at_path("/profile/settings"));
    store.set_token("bearer-abc").await;
    let gateway = gateway_for(&server, store.clone());

    let err = gateway.get::<UserId>("/profile/settings").await.unwrap_err();
    assert_eq!(err.to_string(), "token expired");
    assert_eq!(err.status(), Some(401));

    assert!(store.token().await.is_none());
    assert_eq!(store.navigations(), vec!["/login".to_string()]);
}

/// A 200-status envelope carrying a sentinel message still invalidates
#[tokio::test]
async fn test_sentinel_in_success_status_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/my-courses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "code": 4011,
                "message": "UNAUTHENTICATED"
            })),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::at_path("/my-courses"));
    store.set_token("bearer-abc").await;
    let gateway = gateway_for(&server, store.clone());

    let err = gateway.get::<UserId>("/my-courses").await.unwrap_err();
    assert!(matches!(err, ClientError::Application { code: 4011, .. }));
    assert_eq!(err.to_string(), "UNAUTHENTICATED");

    assert!(store.token().await.is_none());
    assert_eq!(store.navigations(), vec!["/login".to_string()]);
}

/// A plain server error is not an authentication failure
#[tokio::test]
async fn test_server_error_does_not_invalidate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({
                "code": 9999,
                "message": "Internal error"
            })),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::at_path("/admin/dashboard"));
    store.set_token("bearer-abc").await;
    let gateway = gateway_for(&server, store.clone());

    let err = gateway.get::<UserId>("/courses").await.unwrap_err();
    assert!(matches!(err, ClientError::Http { status: 500, .. }));
    assert_eq!(err.to_string(), "Internal error");

    // Token untouched, no redirect
    assert_eq!(store.token().await.as_deref(), Some("bearer-abc"));
    assert!(store.navigations().is_empty());
}

/// An application failure without a sentinel leaves the session alone
#[tokio::test]
async fn test_application_failure_without_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enrollments"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "code": 2001,
                "message": "Course is full"
            })),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::at_path("/my-courses"));
    store.set_token("bearer-abc").await;
    let gateway = gateway_for(&server, store.clone());

    let err = gateway
        .post::<UserId, _>("/enrollments", &json!({"courseId": "c1"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Application { code: 2001, .. }));
    assert_eq!(store.token().await.as_deref(), Some("bearer-abc"));
    assert!(store.navigations().is_empty());
}

/// Two concurrent failing calls both complete and leave storage cleared
#[tokio::test]
async fn test_concurrent_auth_failures_are_safe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string(""))
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::at_path("/profile"));
    store.set_token("bearer-abc").await;
    let gateway = gateway_for(&server, store.clone());

    let (first, second) = futures::join!(
        gateway.get::<UserId>("/users/me"),
        gateway.get::<UserId>("/users/me"),
    );
    assert!(first.is_err());
    assert!(second.is_err());

    assert!(store.token().await.is_none());
    assert!(!store.navigations().is_empty());
}

/// A success envelope whose payload does not match the caller's type
#[tokio::test]
async fn test_mismatched_result_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "code": 1000,
                "result": [1, 2, 3]
            })),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Arc::new(MemorySessionStore::new()));
    let err = gateway.get::<UserId>("/users/me").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

/// Endpoints must be server-relative; nothing is sent otherwise
#[tokio::test]
async fn test_relative_endpoint_required() {
    let server = MockServer::start().await;
    let gateway = gateway_for(&server, Arc::new(MemorySessionStore::new()));

    let err = gateway.get::<UserId>("users/me").await.unwrap_err();
    assert!(matches!(err, ClientError::Request { .. }));
}

//! # Request Gateway
//!
//! The single choke point for every call to the REST backend. It composes
//! the absolute URL, sends the request with credentials included, unwraps
//! the `{code, message, result}` envelope, classifies failures, and runs the
//! session-invalidation procedure when the server signals the caller is no
//! longer authenticated.
//!
//! ## Classification
//!
//! Every response falls into exactly one of four branches:
//! 1. body not parseable as an envelope → [`ClientError::Transport`]
//! 2. envelope parsed, HTTP status outside 2xx → [`ClientError::Http`]
//! 3. HTTP status 2xx but envelope code is not the success code →
//!    [`ClientError::Application`]
//! 4. success → the `result` payload, decoded into the caller's type
//!
//! The backend does not use HTTP status codes consistently for
//! authentication failures; some arrive as 200-status envelopes carrying a
//! sentinel error string. Authentication detection therefore checks both
//! the transport status and the message content on every failure branch.
//! The heuristic lives in one place, [`is_auth_failure`], so it can be
//! swapped for a structured code without touching call sites.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::core::config::{ClientConfig, RouteConfig};
use crate::core::error::{ClientError, ClientResult};
use crate::core::types::{RawEnvelope, RequestOptions};
use crate::session::{invalidate_session, SessionStore};

/// Backend message sentinel for a deleted or unknown account
const USER_NOT_EXISTED: &str = "USER_NOT_EXISTED";

/// Backend message sentinel for a missing or expired session
const UNAUTHENTICATED: &str = "UNAUTHENTICATED";

/// Decide whether a failure means the session is gone
///
/// True when the transport status is 401 or 403, or when the error message
/// contains one of the backend's authentication sentinel substrings. This is
/// the only place the sentinels appear.
pub fn is_auth_failure(status: Option<StatusCode>, message: Option<&str>) -> bool {
    if let Some(status) = status {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return true;
        }
    }
    if let Some(message) = message {
        if message.contains(UNAUTHENTICATED) || message.contains(USER_NOT_EXISTED) {
            return true;
        }
    }
    false
}

/// Outcome of classifying a response body against the envelope contract
enum Classified {
    /// Success envelope; carries the undecoded `result` payload
    Success(Option<serde_json::Value>),
    /// Failure; `invalidate` is set when the session must be torn down
    Failure { error: ClientError, invalidate: bool },
}

/// Classify a response per the envelope contract
///
/// Pure function over the status, body text, and configured success code;
/// the caller applies the invalidation side effect at most once.
fn classify_response(status: StatusCode, body: &str, success_code: i64) -> Classified {
    let envelope: RawEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) => {
            return Classified::Failure {
                error: ClientError::transport(status.as_u16()),
                invalidate: is_auth_failure(Some(status), None),
            };
        }
    };

    if !status.is_success() {
        let message = envelope
            .message
            .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()));
        let invalidate = is_auth_failure(Some(status), Some(&message));
        return Classified::Failure {
            error: ClientError::http(status.as_u16(), message),
            invalidate,
        };
    }

    if envelope.code != success_code {
        let message = envelope.message.unwrap_or_else(|| "API error".to_string());
        let invalidate = is_auth_failure(None, Some(&message));
        return Classified::Failure {
            error: ClientError::application(envelope.code, message),
            invalidate,
        };
    }

    Classified::Success(envelope.result)
}

/// Gateway for all outgoing backend calls
///
/// Domain services build an endpoint path and payload and delegate
/// transport, envelope parsing, and failure classification here; none of
/// them duplicate this logic. Calls are independent with no ordering
/// guarantee between concurrent requests, no retries, and no gateway-level
/// timeout.
pub struct RequestGateway {
    http: reqwest::Client,
    base_url: Url,
    success_code: i64,
    routes: RouteConfig,
    session: Arc<dyn SessionStore>,
}

impl RequestGateway {
    /// Build a gateway from a validated configuration and a session capability
    ///
    /// The HTTP client keeps a cookie store so the backend's session cookie
    /// travels with every call.
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::config(format!("invalid base_url: {e}")))?;

        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(config.transport.user_agent.clone());
        if let Some(timeout) = config.transport.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            success_code: config.success_code,
            routes: config.routes.clone(),
            session,
        })
    }

    /// Issue a request and unwrap the response envelope
    ///
    /// Returns the envelope's `result` decoded into `T` on success. On
    /// failure the error carries a human-readable message and, for
    /// authentication-class failures, the session has already been
    /// invalidated before the error is returned.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ClientResult<T> {
        let url = self.endpoint_url(endpoint)?;
        let correlation_id = Uuid::new_v4();
        debug!(%correlation_id, method = %options.method, %url, "dispatching backend request");

        let headers = build_headers(&options.headers)?;
        let mut builder = self
            .http
            .request(options.method.clone(), url)
            .headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(%correlation_id, error = %e, "request produced no response");
            ClientError::from(e)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|_| ClientError::transport(status.as_u16()))?;

        match classify_response(status, &body, self.success_code) {
            Classified::Success(result) => {
                debug!(%correlation_id, %status, "backend request succeeded");
                let result = result.unwrap_or(serde_json::Value::Null);
                serde_json::from_value(result)
                    .map_err(|e| ClientError::decode(format!("unexpected result payload: {e}")))
            }
            Classified::Failure { error, invalidate } => {
                warn!(
                    %correlation_id,
                    %status,
                    error_type = error.error_type(),
                    error = %error,
                    invalidate,
                    "backend request failed"
                );
                if invalidate {
                    invalidate_session(self.session.as_ref(), &self.routes).await;
                }
                Err(error)
            }
        }
    }

    /// GET the given endpoint
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        self.request(endpoint, RequestOptions::new(Method::GET)).await
    }

    /// POST a JSON payload to the given endpoint
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.request(endpoint, RequestOptions::json(Method::POST, body)?)
            .await
    }

    /// PUT a JSON payload to the given endpoint
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.request(endpoint, RequestOptions::json(Method::PUT, body)?)
            .await
    }

    /// DELETE the given endpoint
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        self.request(endpoint, RequestOptions::new(Method::DELETE))
            .await
    }

    /// Compose the absolute URL for a server-relative endpoint
    fn endpoint_url(&self, endpoint: &str) -> ClientResult<Url> {
        if !endpoint.starts_with('/') {
            return Err(ClientError::request(format!(
                "endpoint must be a server-relative path: {endpoint}"
            )));
        }
        let absolute = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), endpoint);
        Url::parse(&absolute)
            .map_err(|e| ClientError::request(format!("invalid endpoint {endpoint}: {e}")))
    }
}

/// Merge caller headers over the gateway defaults
///
/// The JSON content type goes in first; caller entries replace it when they
/// use the same name.
fn build_headers(extra: &[(String, String)]) -> ClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ClientError::request(format!("invalid header name: {name}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| ClientError::request(format!("invalid header value for {name}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn gateway() -> RequestGateway {
        RequestGateway::new(
            &ClientConfig::new("https://api.lms.example.com"),
            Arc::new(MemorySessionStore::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_is_auth_failure_statuses() {
        assert!(is_auth_failure(Some(StatusCode::UNAUTHORIZED), None));
        assert!(is_auth_failure(Some(StatusCode::FORBIDDEN), None));
        assert!(!is_auth_failure(Some(StatusCode::INTERNAL_SERVER_ERROR), None));
        assert!(!is_auth_failure(Some(StatusCode::OK), None));
        assert!(!is_auth_failure(None, None));
    }

    #[test]
    fn test_is_auth_failure_sentinels() {
        assert!(is_auth_failure(None, Some("UNAUTHENTICATED")));
        assert!(is_auth_failure(None, Some("error: USER_NOT_EXISTED (id 4)")));
        assert!(is_auth_failure(
            Some(StatusCode::OK),
            Some("UNAUTHENTICATED")
        ));
        assert!(!is_auth_failure(None, Some("Internal error")));
        assert!(!is_auth_failure(None, Some("user not existed")));
    }

    #[test]
    fn test_classify_success() {
        let body = r#"{"code":1000,"result":{"id":"u1"}}"#;
        match classify_response(StatusCode::OK, body, 1000) {
            Classified::Success(Some(result)) => assert_eq!(result["id"], "u1"),
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_classify_unparseable_body() {
        match classify_response(StatusCode::FORBIDDEN, "<html>nope</html>", 1000) {
            Classified::Failure { error, invalidate } => {
                assert!(matches!(error, ClientError::Transport { status: 403 }));
                assert!(invalidate);
            }
            _ => panic!("expected failure"),
        }

        // Same body on a plain server error must not invalidate
        match classify_response(StatusCode::BAD_GATEWAY, "", 1000) {
            Classified::Failure { error, invalidate } => {
                assert!(matches!(error, ClientError::Transport { status: 502 }));
                assert!(!invalidate);
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn test_classify_http_failure_uses_envelope_message() {
        let body = r#"{"code":9999,"message":"Internal error"}"#;
        match classify_response(StatusCode::INTERNAL_SERVER_ERROR, body, 1000) {
            Classified::Failure { error, invalidate } => {
                assert_eq!(error.to_string(), "Internal error");
                assert_eq!(error.status(), Some(500));
                assert!(!invalidate);
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn test_classify_http_failure_generic_message() {
        let body = r#"{"code":9999}"#;
        match classify_response(StatusCode::NOT_FOUND, body, 1000) {
            Classified::Failure { error, .. } => {
                assert_eq!(error.to_string(), "HTTP error 404");
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn test_classify_application_failure_with_sentinel() {
        let body = r#"{"code":4011,"message":"UNAUTHENTICATED"}"#;
        match classify_response(StatusCode::OK, body, 1000) {
            Classified::Failure { error, invalidate } => {
                assert!(matches!(error, ClientError::Application { code: 4011, .. }));
                assert_eq!(error.to_string(), "UNAUTHENTICATED");
                assert!(invalidate);
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn test_classify_application_failure_without_sentinel() {
        let body = r#"{"code":2001,"message":"Course is full"}"#;
        match classify_response(StatusCode::OK, body, 1000) {
            Classified::Failure { error, invalidate } => {
                assert!(matches!(error, ClientError::Application { code: 2001, .. }));
                assert!(!invalidate);
            }
            _ => panic!("expected failure"),
        }

        // Missing message falls back to the generic copy
        match classify_response(StatusCode::OK, r#"{"code":2002}"#, 1000) {
            Classified::Failure { error, .. } => assert_eq!(error.to_string(), "API error"),
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn test_classify_respects_configured_success_code() {
        let body = r#"{"code":0,"result":true}"#;
        assert!(matches!(
            classify_response(StatusCode::OK, body, 1000),
            Classified::Failure { .. }
        ));
        // code 0 is invalid config, but classify itself only compares
        assert!(matches!(
            classify_response(StatusCode::OK, r#"{"code":200,"result":true}"#, 200),
            Classified::Success(_)
        ));
    }

    #[test]
    fn test_endpoint_url_composition() {
        let gw = gateway();
        assert_eq!(
            gw.endpoint_url("/auth/login").unwrap().as_str(),
            "https://api.lms.example.com/auth/login"
        );
        assert!(gw.endpoint_url("auth/login").is_err());
    }

    #[test]
    fn test_build_headers_override() {
        let headers = build_headers(&[("Content-Type".to_string(), "text/plain".to_string())])
            .unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.len(), 1);

        let headers = build_headers(&[]).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }
}

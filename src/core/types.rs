//! # Core Types
//!
//! Wire-level types shared across the client: the response envelope every
//! backend endpoint uses and the per-request options bag callers hand to the
//! request gateway.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::core::error::{ClientError, ClientResult};

/// Default application-level success code used by the backend
///
/// Every JSON response carries an envelope whose `code` equals this value on
/// success; any other code is an application failure even when the HTTP
/// status is 2xx. Overridable through [`ClientConfig`](crate::core::config::ClientConfig).
pub const DEFAULT_SUCCESS_CODE: i64 = 1000;

/// The `{code, message, result}` wrapper every backend JSON response uses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Application-level status code; equal to the success code on success
    pub code: i64,

    /// Optional human-readable message, usually present on failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The payload; its shape is a compile-time contract with the caller
    pub result: T,
}

/// Envelope with the payload left undecoded
///
/// Failure envelopes routinely omit `result` or set it to null, so the
/// gateway first parses into this shape and only decodes the payload once
/// the envelope is known to be successful.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawEnvelope {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

/// Per-request options accepted by the request gateway
///
/// The body, when present, is pre-serialized JSON text supplied by the
/// caller; the gateway never serializes payloads on its own behalf. Headers
/// listed here override the gateway's defaults (notably the JSON content
/// type).
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method; defaults to GET
    pub method: Method,

    /// Extra headers merged over the gateway defaults
    pub headers: Vec<(String, String)>,

    /// Pre-serialized JSON body text
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    /// Create options for the given method with no headers or body
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Create options carrying a JSON-serialized payload
    pub fn json<B: Serialize>(method: Method, body: &B) -> ClientResult<Self> {
        let body = serde_json::to_string(body)
            .map_err(|e| ClientError::request(format!("failed to serialize request body: {e}")))?;
        Ok(Self {
            method,
            headers: Vec::new(),
            body: Some(body),
        })
    }

    /// Add a header, overriding any gateway default of the same name
    pub fn header<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

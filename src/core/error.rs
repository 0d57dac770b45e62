//! # Error Handling Module
//!
//! This module provides the error taxonomy for the LMS client using the `thiserror` crate.
//! It defines every failure a request can surface and the conversions from the underlying
//! transport, serialization, and I/O errors.
//!
//! ## Failure classes
//!
//! The request pipeline distinguishes three classes of backend failure:
//! - `Transport`: we received a response but its body was not a parseable envelope
//! - `Http`: the envelope parsed but the HTTP status was outside the success range
//! - `Application`: the HTTP status was fine but the envelope code signals failure
//!
//! Everything else (`Network`, `Decode`, `Request`, `Configuration`, `Io`, `Yaml`) is
//! client-side plumbing: building the request, loading configuration, or turning the
//! typed payload into the caller's type.
//!
//! All variants carry a human-readable message through `Display`; UI callers are
//! expected to show the message and nothing more.

use std::convert::Infallible;
use thiserror::Error;

/// Main result type used throughout the client
///
/// Type alias so call sites can write `ClientResult<T>` instead of
/// `Result<T, ClientError>`.
pub type ClientResult<T> = Result<T, ClientError>;

/// Comprehensive error types for the LMS client
///
/// Each variant represents a different category of failure. The `#[error("...")]`
/// attribute from `thiserror` implements `Display` with the given message.
#[derive(Debug, Error, Clone)]
pub enum ClientError {
    /// Response body was not parseable as a response envelope; carries the raw HTTP status
    #[error("Transport error: unparseable response (status {status})")]
    Transport { status: u16 },

    /// HTTP status outside the success range, with a server-supplied or generic message
    #[error("{message}")]
    Http { status: u16, message: String },

    /// HTTP status was a success but the envelope code signals an application failure
    #[error("{message}")]
    Application { code: i64, message: String },

    /// The request never produced a response (DNS, connect, TLS, or read failure)
    #[error("Network error: {message}")]
    Network { message: String },

    /// The envelope's `result` payload failed to deserialize into the requested type
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// The request could not be built (bad endpoint, invalid header name or value)
    #[error("Invalid request: {message}")]
    Request { message: String },

    /// Configuration-related errors (invalid config, missing files, bad overrides)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O errors while reading configuration files
    #[error("I/O error: {message}")]
    Io { message: String },

    /// YAML parsing errors for configuration files
    #[error("YAML error: {message}")]
    Yaml { message: String },
}

impl ClientError {
    /// Create a transport error carrying the raw HTTP status
    pub fn transport(status: u16) -> Self {
        Self::Transport { status }
    }

    /// Create an HTTP error with a status and message
    pub fn http<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Create an application error with the envelope code and message
    pub fn application<S: Into<String>>(code: i64, message: S) -> Self {
        Self::Application {
            code,
            message: message.into(),
        }
    }

    /// Create a decode error with a custom message
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a request-construction error with a custom message
    pub fn request<S: Into<String>>(message: S) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Create a configuration error with a custom message
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get the HTTP status associated with this error, if any
    ///
    /// Only failures observed on the wire carry a status; client-side
    /// failures return `None`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status } => Some(*status),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get a string representation of the error type for structured logging
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport_error",
            Self::Http { .. } => "http_error",
            Self::Application { .. } => "application_error",
            Self::Network { .. } => "network_error",
            Self::Decode { .. } => "decode_error",
            Self::Request { .. } => "request_error",
            Self::Configuration { .. } => "configuration_error",
            Self::Io { .. } => "io_error",
            Self::Yaml { .. } => "yaml_error",
        }
    }
}

/// Implement conversion from Infallible for trait-bound compatibility
impl From<Infallible> for ClientError {
    fn from(infallible: Infallible) -> Self {
        // This can never be called since Infallible has no values
        match infallible {}
    }
}

/// Implement conversion from std::io::Error
impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Implement conversion from serde_json::Error
impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

/// Implement conversion from serde_yaml::Error
impl From<serde_yaml::Error> for ClientError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml {
            message: err.to_string(),
        }
    }
}

/// Implement conversion from reqwest::Error
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}
